use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

/// Hardware-backed primitives of a fixed-width word. Implemented for `u32`
/// and `u64`; the sign bit of the original signed interpretation is the top
/// bit of the unsigned word.
pub trait BitWord:
    Copy
    + Eq
    + Ord
    + Default
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    const WIDTH: u32;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    fn count_ones(self) -> u32;
    fn leading_zeros(self) -> u32;
    fn trailing_zeros(self) -> u32;
    fn reverse_bits(self) -> Self;
    fn swap_bytes(self) -> Self;
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_neg(self) -> Self;

    /// Low 32-bit half; the whole word for `u32`.
    fn low_u32(self) -> u32;
    /// High 32-bit half; zero for `u32`.
    fn high_u32(self) -> u32;
}

macro_rules! bit_word_impl {
    ($word_type:ty) => {
        impl BitWord for $word_type {
            const WIDTH: u32 = <$word_type>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$word_type>::MAX;

            #[inline]
            fn count_ones(self) -> u32 {
                <$word_type>::count_ones(self)
            }
            #[inline]
            fn leading_zeros(self) -> u32 {
                <$word_type>::leading_zeros(self)
            }
            #[inline]
            fn trailing_zeros(self) -> u32 {
                <$word_type>::trailing_zeros(self)
            }
            #[inline]
            fn reverse_bits(self) -> Self {
                <$word_type>::reverse_bits(self)
            }
            #[inline]
            fn swap_bytes(self) -> Self {
                <$word_type>::swap_bytes(self)
            }
            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$word_type>::wrapping_add(self, rhs)
            }
            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$word_type>::wrapping_sub(self, rhs)
            }
            #[inline]
            fn wrapping_neg(self) -> Self {
                <$word_type>::wrapping_neg(self)
            }
            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn low_u32(self) -> u32 {
                self as u32
            }
            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn high_u32(self) -> u32 {
                ((u64::from(self)) >> 32) as u32
            }
        }
    };
}

bit_word_impl!(u32);
bit_word_impl!(u64);
