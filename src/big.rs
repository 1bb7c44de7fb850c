//! Arbitrary-precision adaptation: the fixed-width primitives re-applied to
//! the highest or lowest non-zero byte of a magnitude's minimal little-endian
//! byte representation, combined with an `8 * index` offset.
//!
//! The adaptation is defined on non-negative values only. Signed callers go
//! through [`magnitude`], which rejects negative input instead of guessing a
//! two's-complement width for it.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::ops::{BitOps, NearestPowerOfTwo};
use crate::tables;

/// Signed entry seam: the magnitude of a non-negative `BigInt`, or
/// [`Error::NegativeArgument`].
pub fn magnitude(value: &BigInt) -> Result<&BigUint> {
    match value.sign() {
        Sign::Minus => Err(Error::NegativeArgument),
        _ => Ok(value.magnitude()),
    }
}

fn highest_nonzero_byte(bytes: &[u8]) -> Option<(usize, u8)> {
    bytes
        .iter()
        .enumerate()
        .rev()
        .find(|(_, byte)| **byte != 0)
        .map(|(index, byte)| (index, *byte))
}

fn lowest_nonzero_byte(bytes: &[u8]) -> Option<(usize, u8)> {
    bytes
        .iter()
        .enumerate()
        .find(|(_, byte)| **byte != 0)
        .map(|(index, byte)| (index, *byte))
}

/// Number of set bits: the bytes are chunked into 32-bit words and each word
/// popcount is summed. `pop_count(0) == 0`.
pub fn pop_count(value: &BigUint) -> u64 {
    value
        .to_bytes_le()
        .chunks(4)
        .map(|chunk| {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            u64::from(u32::from_le_bytes(word).pop_count())
        })
        .sum()
}

/// `bit_length(0) == 0`; `2^(len-1) <= x < 2^len` for positive `x`.
pub fn bit_length(value: &BigUint) -> u64 {
    match highest_nonzero_byte(&value.to_bytes_le()) {
        None => 0,
        Some((index, byte)) => u64::from(tables::LOG2_BYTE[byte as usize]) + 8 * index as u64 + 1,
    }
}

/// Position of the highest set bit, located through the highest non-zero
/// byte and the 256-entry log2 table. `log2(0)` is the sentinel `0`.
pub fn log2(value: &BigUint) -> u64 {
    match highest_nonzero_byte(&value.to_bytes_le()) {
        None => 0,
        Some((index, byte)) => u64::from(tables::LOG2_BYTE[byte as usize]) + 8 * index as u64,
    }
}

/// Distance from the bit length to the next power-of-two bit length. A
/// magnitude has no fixed width, so the count cannot be width-relative.
pub fn leading_zero_count(value: &BigUint) -> u64 {
    let length = bit_length(value);
    let length_bits = length.bit_length();
    ((1u128 << length_bits) - u128::from(length)) as u64
}

/// `None` for zero, which has no set bit to count up to.
pub fn trailing_zero_count(value: &BigUint) -> Option<u64> {
    lowest_nonzero_byte(&value.to_bytes_le()).map(|(index, byte)| {
        let isolated = u32::from(byte).least_significant_one();
        8 * index as u64 + u64::from(isolated.bit_index())
    })
}

/// Lowest set bit as a single-bit mask; `0` maps to `0`.
pub fn least_significant_one(value: &BigUint) -> BigUint {
    match trailing_zero_count(value) {
        None => BigUint::zero(),
        Some(index) => BigUint::one() << index,
    }
}

/// Highest set bit as a single-bit mask; `0` maps to `0`.
pub fn most_significant_one(value: &BigUint) -> BigUint {
    if value.is_zero() {
        return BigUint::zero();
    }
    BigUint::one() << log2(value)
}

/// Bit index of an isolated single-bit magnitude: the lowest non-zero byte's
/// offset plus a De Bruijn lookup on that byte.
///
/// Caller contract: exactly one set bit; the result is unspecified
/// otherwise and the contract is not validated.
pub fn bit_index_of(value: &BigUint) -> u64 {
    trailing_zero_count(value).unwrap_or(0)
}

/// Smallest `2^n - 1` mask `>= value`; `fold_right(0) == 0`.
pub fn fold_right(value: &BigUint) -> BigUint {
    if value.is_zero() {
        return BigUint::zero();
    }
    (BigUint::one() << bit_length(value)) - 1u32
}

/// Fold with the bits below the lowest set bit cleared; `fold_left(0) == 0`.
pub fn fold_left(value: &BigUint) -> BigUint {
    match trailing_zero_count(value) {
        None => BigUint::zero(),
        Some(shift) => (fold_right(value) >> shift) << shift,
    }
}

pub fn is_power_of_two(value: &BigUint) -> bool {
    if value.is_zero() {
        return false;
    }
    let below = value - 1u32;
    (value & &below).is_zero()
}

/// Smallest power of two `>= value` (`> value` when `proper`).
pub fn round_up_to_power_of_two(value: &BigUint, proper: bool) -> Result<BigUint> {
    if value.is_zero() {
        return Err(Error::ZeroArgument);
    }
    if is_power_of_two(value) {
        return Ok(if proper { value << 1u32 } else { value.clone() });
    }
    Ok(fold_right(&(value - 1u32)) + 1u32)
}

/// Largest power of two `<= value` (`< value` when `proper`).
pub fn round_down_to_power_of_two(value: &BigUint, proper: bool) -> Result<BigUint> {
    if value.is_zero() {
        return Err(Error::ZeroArgument);
    }
    if is_power_of_two(value) {
        return Ok(if proper { value >> 1u32 } else { value.clone() });
    }
    Ok((fold_right(&(value - 1u32)) + 1u32) >> 1u32)
}

pub fn round_to_nearest_power_of_two(value: &BigUint) -> Result<NearestPowerOfTwo<BigUint>> {
    if value.is_zero() {
        return Err(Error::ZeroArgument);
    }
    let greater = fold_right(&(value - 1u32)) + 1u32;
    let less = &greater >> 1u32;
    // `less` wins only strictly; ties resolve toward `greater`.
    let nearest = if &greater - value > value - &less {
        less.clone()
    } else {
        greater.clone()
    };
    Ok(NearestPowerOfTwo {
        nearest,
        greater,
        less,
    })
}

/// Reverses the low `bit_width` bits of `value`. The width is declared by
/// the caller rather than inferred from the incidental byte length of the
/// representation; a value that does not fit the declared width is an error.
///
/// Byte-at-a-time through the 256-entry reversal table, byte order reversed,
/// then shifted down by the padding remainder.
pub fn reverse_bits(value: &BigUint, bit_width: u64) -> Result<BigUint> {
    let length = bit_length(value);
    if length > bit_width {
        return Err(Error::WidthTooSmall {
            bit_width,
            bit_length: length,
        });
    }
    let byte_count = (bit_width as usize).div_ceil(8);
    let mut bytes = value.to_bytes_le();
    bytes.resize(byte_count, 0);
    let reversed: Vec<u8> = bytes
        .iter()
        .rev()
        .map(|&byte| tables::REVERSE_BYTE[byte as usize])
        .collect();
    Ok(BigUint::from_bytes_le(&reversed) >> (8 * byte_count as u64 - bit_width))
}
