//! The signed arbitrary-precision value type.
//!
//! A [`FatNum`] is a sign, a chunk width, and a most-significant-first
//! sequence of radix-16 digit chunks. Two invariants hold for every
//! value built through this module: the chunk sequence never starts
//! with a redundant zero chunk (a lone zero chunk represents zero), and
//! zero itself always carries a positive sign.
//!
//! Equality is representational: the same number stored at two
//! different chunk widths compares unequal. Use [`FatNum::cmp`] only
//! between values of one width when numeric ordering is wanted, or
//! compare decimal renderings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::arith;
use crate::codec;
use crate::error::FatNumError;

/// Sign of a value. `Negative < Positive` so the derived ordering
/// matches numeric ordering on the sign axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    /// Sign of a product of two operands with these signs.
    #[inline]
    pub fn product_with(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    #[inline]
    pub fn flipped(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// An arbitrary-precision signed integer stored as fixed-width radix-16
/// digit chunks.
///
/// # Examples
///
/// ```
/// use fatnum::FatNum;
///
/// let a = FatNum::from_decimal_str("123456789123456789")?;
/// let b = FatNum::from_decimal_str("-987654321")?;
/// let sum = a.add(&b)?;
/// assert_eq!(sum.to_decimal_string(), "123456788135802468");
/// # Ok::<(), fatnum::FatNumError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FatNum {
    sign: Sign,
    chunk_width: u32,
    chunks: Vec<u64>,
}

impl FatNum {
    /// Parse decimal text, deriving the chunk width from the magnitude
    /// length. Accepts an optional leading `-` followed by one or more
    /// ASCII digits, nothing else.
    pub fn from_decimal_str(text: &str) -> Result<Self, FatNumError> {
        // Width follows the magnitude's digit count, sign excluded.
        let digit_count = text.strip_prefix('-').unwrap_or(text).len();
        Self::from_decimal_str_with_width(text, codec::chunk_width_for(digit_count))
    }

    /// Parse decimal text at an explicit chunk width in `1..=16`.
    pub fn from_decimal_str_with_width(text: &str, chunk_width: u32) -> Result<Self, FatNumError> {
        let (sign, chunks) = codec::encode(text, chunk_width)?;
        Ok(Self {
            sign,
            chunk_width,
            chunks,
        })
    }

    /// Zero at the given chunk width (must be in `1..=16`).
    pub fn zero(chunk_width: u32) -> Self {
        debug_assert!(codec::validate_chunk_width(chunk_width).is_ok());
        Self {
            sign: Sign::Positive,
            chunk_width,
            chunks: vec![0],
        }
    }

    /// One at the given chunk width (must be in `1..=16`).
    pub fn one(chunk_width: u32) -> Self {
        debug_assert!(codec::validate_chunk_width(chunk_width).is_ok());
        Self {
            sign: Sign::Positive,
            chunk_width,
            chunks: vec![1],
        }
    }

    /// Convert a `u64` at the default chunk width.
    pub fn from_u64(value: u64) -> Self {
        // The default width is 8 hex digits, so a u64 spans at most two
        // chunks.
        let bits = codec::chunk_bits(codec::DEFAULT_CHUNK_WIDTH);
        let high = value >> bits;
        let chunks = if high != 0 {
            vec![high, value & ((1u64 << bits) - 1)]
        } else {
            vec![value]
        };
        Self {
            sign: Sign::Positive,
            chunk_width: codec::DEFAULT_CHUNK_WIDTH,
            chunks,
        }
    }

    /// Convert an `i64` at the default chunk width.
    pub fn from_i64(value: i64) -> Self {
        let mut out = Self::from_u64(value.unsigned_abs());
        if value < 0 {
            out.sign = Sign::Negative;
        }
        out
    }

    /// Assemble a value from parts the arithmetic layer has already
    /// normalized. An all-zero magnitude forces the sign positive.
    pub(crate) fn from_parts(sign: Sign, chunk_width: u32, chunks: Vec<u64>) -> Self {
        let mut out = Self {
            sign,
            chunk_width,
            chunks,
        };
        if out.is_zero() {
            out.sign = Sign::Positive;
        }
        out
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn chunk_width(&self) -> u32 {
        self.chunk_width
    }

    /// The digit chunks, most-significant first.
    #[inline]
    pub fn chunks(&self) -> &[u64] {
        &self.chunks
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_zero(&self) -> bool {
        self.chunks.iter().all(|&c| c == 0)
    }

    /// Render as decimal text, `-` prefix for negative values.
    pub fn to_decimal_string(&self) -> String {
        let magnitude = codec::decode(&self.chunks, self.chunk_width);
        if self.sign == Sign::Negative && magnitude != "0" {
            format!("-{magnitude}")
        } else {
            magnitude
        }
    }

    /// The absolute value.
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            chunk_width: self.chunk_width,
            chunks: self.chunks.clone(),
        }
    }

    /// The negated value. Zero stays positive.
    pub fn neg(&self) -> Self {
        let mut out = self.clone();
        out.flip_sign();
        out
    }

    /// Flip the sign in place. Zero stays positive.
    pub fn flip_sign(&mut self) {
        if !self.is_zero() {
            self.sign = self.sign.flipped();
        }
    }
}

impl Ord for FatNum {
    /// Numeric ordering for values of one chunk width: sign first, then
    /// magnitude (reversed between two negatives). Between widths the
    /// magnitude rule still applies chunk-count-first, with the width
    /// itself as the final tie-break so that `Equal` coincides exactly
    /// with `==`.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let magnitude = arith::cmp_magnitudes(&self.chunks, &other.chunks)
            .then_with(|| self.chunk_width.cmp(&other.chunk_width));
        match self.sign {
            Sign::Positive => magnitude,
            Sign::Negative => magnitude.reverse(),
        }
    }
}

impl PartialOrd for FatNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for FatNum {
    type Err = FatNumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl fmt::Display for FatNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal_string())
    }
}

impl fmt::Debug for FatNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self
            .chunks
            .iter()
            .map(|&c| codec::chunk_to_hex(c, self.chunk_width))
            .collect();
        write!(
            f,
            "FatNum(sign={:?}, width={}, chunks=[{}])",
            self.sign,
            self.chunk_width,
            groups.join(" ")
        )
    }
}

impl Serialize for FatNum {
    /// Serializes as the canonical decimal string.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

impl<'de> Deserialize<'de> for FatNum {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        FatNum::from_decimal_str(&text).map_err(serde::de::Error::custom)
    }
}
