use std::fmt;

/// Errors from FatNum construction and arithmetic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FatNumError {
    /// Input text is not an optionally-signed decimal integer.
    InvalidFormat(String),
    /// A binary operation received operands with different chunk
    /// widths. Widths are never coerced; the caller re-encodes.
    ChunkWidthMismatch { left: u32, right: u32 },
    /// Unsigned subtraction was called with a minuend smaller than the
    /// subtrahend. Surfaced instead of wrapping around.
    InvalidSubtraction,
    /// An explicit chunk width outside `1..=16`. A chunk holds at least
    /// one radix-16 digit and must fit in a `u64` (16 digits).
    InvalidChunkWidth(u32),
}

impl fmt::Display for FatNumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatNumError::InvalidFormat(text) => {
                write!(f, "not a valid decimal integer: `{text}`")
            }
            FatNumError::ChunkWidthMismatch { left, right } => {
                write!(f, "chunk width mismatch: {left} vs {right}")
            }
            FatNumError::InvalidSubtraction => {
                write!(f, "unsigned subtraction requires minuend >= subtrahend")
            }
            FatNumError::InvalidChunkWidth(width) => {
                write!(f, "chunk width must be in 1..=16, got {width}")
            }
        }
    }
}

impl std::error::Error for FatNumError {}
