//! Low-level integer bit algorithms — population count, zero counts, bit
//! length, base-2 logarithm, fold smearing, power-of-two rounding, De Bruijn
//! single-bit indexing, bit/byte reversal, carry-preserving shifts — over
//! 32-bit and 64-bit words and over arbitrary-precision magnitudes.

pub mod big;
pub mod error;
pub mod ops;
mod tables;
pub mod word;

pub use error::{Error, Result};
pub use ops::{BitOps, NearestPowerOfTwo};
pub use word::BitWord;
