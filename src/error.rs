use thiserror::Error;

/// Argument-validation failures. Domain sentinels (`log2(0) == 0`,
/// `trailing_zero_count(0) == WIDTH`) are returned values, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("shift count {count} exceeds word width {width}")]
    ShiftCountTooLarge { count: u32, width: u32 },

    #[error("operation requires a strictly positive value")]
    ZeroArgument,

    #[error("operation is defined on non-negative values only")]
    NegativeArgument,

    #[error("declared bit width {bit_width} is smaller than the value's bit length {bit_length}")]
    WidthTooSmall { bit_width: u64, bit_length: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
