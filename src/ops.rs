use crate::error::{Error, Result};
use crate::tables;
use crate::word::BitWord;

/// The two powers of two bracketing a value, plus whichever is closer.
/// Ties resolve toward `greater`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearestPowerOfTwo<Word> {
    pub nearest: Word,
    pub greater: Word,
    pub less: Word,
}

/// Bit algorithms over any [`BitWord`]. All operations are pure; zero-input
/// sentinels are returned values, never errors.
pub trait BitOps: BitWord {
    #[inline]
    fn pop_count(self) -> u32 {
        self.count_ones()
    }

    /// Minimal number of bits for the magnitude: `bit_length(0) == 0`, and
    /// `2^(len-1) <= x < 2^len` for positive `x`. A word with its top bit
    /// set fills the full width.
    #[inline]
    fn bit_length(self) -> u32 {
        Self::WIDTH - self.leading_zeros()
    }

    /// Position of the highest set bit; `log2(0)` is the sentinel `0`.
    #[inline]
    fn log2(self) -> u32 {
        let high = self.high_u32();
        if high != 0 {
            32 + tables::debruijn_msb_index(high)
        } else {
            tables::debruijn_msb_index(self.low_u32())
        }
    }

    /// `leading_zero_count(0) == WIDTH`.
    #[inline]
    fn leading_zero_count(self) -> u32 {
        self.leading_zeros()
    }

    /// `trailing_zero_count(0) == WIDTH`.
    #[inline]
    fn trailing_zero_count(self) -> u32 {
        self.trailing_zeros()
    }

    /// Smears the highest set bit downward, yielding the smallest mask of
    /// the form `2^n - 1` that is `>= self`. A word with its top bit set
    /// saturates to all ones.
    #[inline]
    fn fold_right(self) -> Self {
        let mut value = self;
        let mut shift = 1u32;
        while shift < Self::WIDTH {
            value = value | (value >> shift);
            shift <<= 1;
        }
        value
    }

    /// Complementary smear upward from the lowest set bit: bits below it are
    /// cleared, bits from it up to the fold boundary are set.
    #[inline]
    fn fold_left(self) -> Self {
        if self == Self::ZERO {
            return Self::ZERO;
        }
        let shift = self.trailing_zeros();
        (self.fold_right() >> shift) << shift
    }

    #[inline]
    fn is_power_of_two(self) -> bool {
        self != Self::ZERO && self & self.wrapping_sub(Self::ONE) == Self::ZERO
    }

    /// Lowest set bit as a single-bit mask; `0` maps to `0`.
    #[inline]
    fn least_significant_one(self) -> Self {
        self & self.wrapping_neg()
    }

    /// Highest set bit as a single-bit mask; `0` maps to `0`.
    #[inline]
    fn most_significant_one(self) -> Self {
        let folded = self.fold_right();
        folded & !(folded >> 1)
    }

    /// Bit index of an isolated single-bit value via De Bruijn
    /// multiply-shift; 64-bit words split into 32-bit halves.
    ///
    /// Caller contract: `self` has exactly one set bit, as produced by
    /// [`least_significant_one`](Self::least_significant_one) or
    /// [`most_significant_one`](Self::most_significant_one). The result is
    /// unspecified otherwise; the contract is not validated on this path.
    #[inline]
    fn bit_index(self) -> u32 {
        let low = self.low_u32();
        if low != 0 {
            tables::debruijn_lsb_index(low)
        } else {
            32 + tables::debruijn_lsb_index(self.high_u32())
        }
    }

    /// Smallest power of two `>= self` (`> self` when `proper`). Wraps at
    /// the top of the range, matching the fixed-width fold formula.
    fn round_up_to_power_of_two(self, proper: bool) -> Result<Self> {
        if self == Self::ZERO {
            return Err(Error::ZeroArgument);
        }
        if self.is_power_of_two() {
            return Ok(if proper { self << 1 } else { self });
        }
        Ok(self
            .wrapping_sub(Self::ONE)
            .fold_right()
            .wrapping_add(Self::ONE))
    }

    /// Largest power of two `<= self` (`< self` when `proper`).
    fn round_down_to_power_of_two(self, proper: bool) -> Result<Self> {
        if self == Self::ZERO {
            return Err(Error::ZeroArgument);
        }
        if self.is_power_of_two() {
            return Ok(if proper { self >> 1 } else { self });
        }
        Ok(self
            .wrapping_sub(Self::ONE)
            .fold_right()
            .wrapping_add(Self::ONE)
            >> 1)
    }

    fn round_to_nearest_power_of_two(self) -> Result<NearestPowerOfTwo<Self>> {
        if self == Self::ZERO {
            return Err(Error::ZeroArgument);
        }
        let greater = self
            .wrapping_sub(Self::ONE)
            .fold_right()
            .wrapping_add(Self::ONE);
        let less = greater >> 1;
        // `less` wins only strictly; ties resolve toward `greater`.
        let nearest = if greater.wrapping_sub(self) > self.wrapping_sub(less) {
            less
        } else {
            greater
        };
        Ok(NearestPowerOfTwo {
            nearest,
            greater,
            less,
        })
    }

    /// Shifts left by `count`, returning the shifted value and the bits that
    /// overflowed out of the top, right-aligned. `count` may be anything in
    /// `0..=WIDTH`; larger counts fail rather than clamp.
    fn carry_shift_left(self, count: u32) -> Result<(Self, Self)> {
        if count > Self::WIDTH {
            return Err(Error::ShiftCountTooLarge {
                count,
                width: Self::WIDTH,
            });
        }
        if count == 0 {
            return Ok((self, Self::ZERO));
        }
        if count == Self::WIDTH {
            return Ok((Self::ZERO, self));
        }
        let carry = self >> (Self::WIDTH - count);
        Ok((self << count, carry))
    }

    /// Mirror of [`carry_shift_left`](Self::carry_shift_left): the carry is
    /// the low `count` bits, left-aligned for feeding the next word of a
    /// multi-word shift chain.
    fn carry_shift_right(self, count: u32) -> Result<(Self, Self)> {
        if count > Self::WIDTH {
            return Err(Error::ShiftCountTooLarge {
                count,
                width: Self::WIDTH,
            });
        }
        if count == 0 {
            return Ok((self, Self::ZERO));
        }
        if count == Self::WIDTH {
            return Ok((Self::ZERO, self));
        }
        let carry = self << (Self::WIDTH - count);
        Ok((self >> count, carry))
    }
}

impl<Word: BitWord> BitOps for Word {}
