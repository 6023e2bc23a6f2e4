//! Arbitrary-precision signed integers stored as fixed-width radix-16
//! digit chunks.
//!
//! Values parse from and render to decimal text; internally each
//! magnitude is a most-significant-first sequence of hex digit groups,
//! `chunk_width` digits per group, one `u64` per group. Addition and
//! subtraction run chunk-at-a-time with carry and borrow; products use
//! recursive half-splitting with a quadratic base case for small
//! operands.
//!
//! ```
//! use fatnum::FatNum;
//!
//! let a = FatNum::from_decimal_str("123")?;
//! let b = FatNum::from_decimal_str("456")?;
//! assert_eq!(a.mul(&b)?.to_decimal_string(), "56088");
//! # Ok::<(), fatnum::FatNumError>(())
//! ```
//!
//! Binary operations require both operands to share one chunk width and
//! fail with [`FatNumError::ChunkWidthMismatch`] otherwise; nothing is
//! ever re-chunked implicitly.

pub mod arith;
pub mod codec;
pub mod error;
pub mod value;

pub use arith::KARATSUBA_CUTOFF;
pub use codec::{chunk_width_for, DEFAULT_CHUNK_WIDTH, MAX_CHUNK_WIDTH};
pub use error::FatNumError;
pub use value::{FatNum, Sign};
