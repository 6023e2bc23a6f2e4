//! Digit-chunk codec: decimal text to and from fixed-width radix-16
//! digit groups.
//!
//! A chunk is one `u64` holding exactly `chunk_width` hex digits
//! (`chunk < 16^chunk_width`). Sequences are most-significant chunk
//! first and carry no redundant leading zero chunks.

use crate::error::FatNumError;
use crate::value::Sign;

/// Default chunk width: 8 hex digits, one 32-bit word per chunk.
pub const DEFAULT_CHUNK_WIDTH: u32 = 8;

/// Largest supported chunk width: 16 hex digits fill a `u64`.
pub const MAX_CHUNK_WIDTH: u32 = 16;

/// Bits covered by one chunk of `width` hex digits.
#[inline]
pub(crate) fn chunk_bits(width: u32) -> u32 {
    4 * width
}

/// Exclusive upper bound of a chunk value: `16^width`.
#[inline]
pub(crate) fn chunk_modulus(width: u32) -> u128 {
    1u128 << chunk_bits(width)
}

/// Mask selecting one chunk out of a `u128` accumulator.
#[inline]
pub(crate) fn chunk_mask(width: u32) -> u128 {
    chunk_modulus(width) - 1
}

pub(crate) fn validate_chunk_width(width: u32) -> Result<(), FatNumError> {
    if (1..=MAX_CHUNK_WIDTH).contains(&width) {
        Ok(())
    } else {
        Err(FatNumError::InvalidChunkWidth(width))
    }
}

/// Pick a chunk width from the decimal digit count of an operand.
///
/// Four hex digits cover roughly ten decimal digits (4/10 approximates
/// log2(10)/log2(16)). Small operands keep the word-friendly default;
/// very large ones scale the width (capped at 16, rounded up to a power
/// of two) so the chunk count stays bounded.
pub fn chunk_width_for(decimal_digit_count: usize) -> u32 {
    let hex_digits = decimal_digit_count * 4 / 10;
    if hex_digits <= DEFAULT_CHUNK_WIDTH as usize {
        return DEFAULT_CHUNK_WIDTH;
    }
    let width = (hex_digits / 1000).clamp(DEFAULT_CHUNK_WIDTH as usize, MAX_CHUNK_WIDTH as usize);
    (width as u32).next_power_of_two()
}

/// Split optionally-signed decimal text into sign and magnitude digits.
fn split_sign(text: &str) -> Result<(Sign, &str), FatNumError> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (Sign::Negative, rest),
        None => (Sign::Positive, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FatNumError::InvalidFormat(text.to_string()));
    }
    Ok((sign, digits))
}

/// Encode optionally-signed decimal text as a chunk sequence.
///
/// The magnitude is accumulated by repeated multiply-by-ten in base
/// `16^chunk_width`, growing the sequence as carries demand, which
/// yields the same most-significant-first width-sized digit groups as
/// rendering to hex and splitting would. `"-0"` and any other all-zero
/// spelling come back with a positive sign.
pub fn encode(text: &str, chunk_width: u32) -> Result<(Sign, Vec<u64>), FatNumError> {
    validate_chunk_width(chunk_width)?;
    let (sign, digits) = split_sign(text)?;

    let bits = chunk_bits(chunk_width);
    let mask = chunk_mask(chunk_width);
    // Least-significant chunk first while accumulating, flipped at the end.
    let mut chunks: Vec<u64> = vec![0];
    for b in digits.bytes() {
        let mut carry = (b - b'0') as u128;
        for chunk in chunks.iter_mut() {
            let wide = *chunk as u128 * 10 + carry;
            *chunk = (wide & mask) as u64;
            carry = wide >> bits;
        }
        if carry != 0 {
            // carry <= 9, so it always fits a fresh chunk
            chunks.push(carry as u64);
        }
    }
    chunks.reverse();

    let sign = if chunks.iter().all(|&c| c == 0) {
        Sign::Positive
    } else {
        sign
    };
    Ok((sign, chunks))
}

/// Decode a chunk sequence as an unsigned decimal string.
///
/// Repeated long division by ten over the chunks, most-significant
/// first; each round yields one decimal digit. An all-zero sequence
/// decodes to exactly `"0"`.
pub fn decode(chunks: &[u64], chunk_width: u32) -> String {
    if chunks.iter().all(|&c| c == 0) {
        return "0".to_string();
    }
    let bits = chunk_bits(chunk_width);
    let mut work = chunks.to_vec();
    let mut digits = Vec::new();
    while !work.iter().all(|&c| c == 0) {
        let mut remainder: u128 = 0;
        for chunk in work.iter_mut() {
            let combined = (remainder << bits) | *chunk as u128;
            *chunk = (combined / 10) as u64;
            remainder = combined % 10;
        }
        digits.push(remainder as u8 + b'0');
    }
    digits.reverse();
    String::from_utf8(digits).unwrap()
}

/// Render one chunk as its fixed-width hex digit group.
pub fn chunk_to_hex(chunk: u64, chunk_width: u32) -> String {
    format!("{:0>width$x}", chunk, width = chunk_width as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_heuristic_defaults_small() {
        assert_eq!(chunk_width_for(0), 8);
        assert_eq!(chunk_width_for(1), 8);
        assert_eq!(chunk_width_for(20), 8);
        // 21 digits -> 8 estimated hex digits, still the default
        assert_eq!(chunk_width_for(21), 8);
    }

    #[test]
    fn test_width_heuristic_clamps_mid_range() {
        // Above the default estimate but below the scaling knee: clamp
        // floor keeps the default width.
        assert_eq!(chunk_width_for(100), 8);
        assert_eq!(chunk_width_for(10_000), 8);
        assert_eq!(chunk_width_for(22_000), 8);
    }

    #[test]
    fn test_width_heuristic_rounds_up_to_sixteen() {
        // 22_500 digits -> 9_000 hex -> 9, rounded up to 16
        assert_eq!(chunk_width_for(22_500), 16);
        assert_eq!(chunk_width_for(40_000), 16);
        // clamp ceiling holds for absurd sizes
        assert_eq!(chunk_width_for(100_000_000), 16);
    }

    #[test]
    fn test_encode_small() {
        let (sign, chunks) = encode("123", 8).unwrap();
        assert_eq!(sign, Sign::Positive);
        assert_eq!(chunks, vec![0x7b]);
    }

    #[test]
    fn test_encode_negative() {
        let (sign, chunks) = encode("-123", 8).unwrap();
        assert_eq!(sign, Sign::Negative);
        assert_eq!(chunks, vec![0x7b]);
    }

    #[test]
    fn test_encode_crosses_chunk_boundary() {
        // 2^32 needs a second chunk at width 8
        let (_, chunks) = encode("4294967296", 8).unwrap();
        assert_eq!(chunks, vec![1, 0]);
        // 2^64 needs a third
        let (_, chunks) = encode("18446744073709551616", 8).unwrap();
        assert_eq!(chunks, vec![1, 0, 0]);
    }

    #[test]
    fn test_encode_full_width_sixteen() {
        // u64::MAX is exactly one width-16 chunk
        let (_, chunks) = encode("18446744073709551615", 16).unwrap();
        assert_eq!(chunks, vec![u64::MAX]);
        let (_, chunks) = encode("18446744073709551616", 16).unwrap();
        assert_eq!(chunks, vec![1, 0]);
    }

    #[test]
    fn test_encode_zero_spellings() {
        assert_eq!(encode("0", 8).unwrap(), (Sign::Positive, vec![0]));
        assert_eq!(encode("-0", 8).unwrap(), (Sign::Positive, vec![0]));
        assert_eq!(encode("000", 8).unwrap(), (Sign::Positive, vec![0]));
    }

    #[test]
    fn test_encode_drops_redundant_leading_zeros() {
        assert_eq!(encode("0042", 8).unwrap(), (Sign::Positive, vec![0x2a]));
    }

    #[test]
    fn test_encode_rejects_malformed_text() {
        for bad in ["", "-", "12a", "+5", " 1", "1 ", "--3", "1-2", "1.5"] {
            assert_eq!(
                encode(bad, 8),
                Err(FatNumError::InvalidFormat(bad.to_string())),
                "expected rejection of {bad:?}"
            );
        }
    }

    #[test]
    fn test_encode_rejects_bad_width() {
        assert_eq!(encode("1", 0), Err(FatNumError::InvalidChunkWidth(0)));
        assert_eq!(encode("1", 17), Err(FatNumError::InvalidChunkWidth(17)));
    }

    #[test]
    fn test_decode_basics() {
        assert_eq!(decode(&[0], 8), "0");
        assert_eq!(decode(&[0, 0], 8), "0");
        assert_eq!(decode(&[0x7b], 8), "123");
        assert_eq!(decode(&[1, 0], 8), "4294967296");
        assert_eq!(decode(&[u64::MAX], 16), "18446744073709551615");
    }

    #[test]
    fn test_roundtrip_various_widths() {
        let samples = [
            "1",
            "9",
            "4294967295",
            "4294967296",
            "340282366920938463463374607431768211456",
            "999999999999999999999999999999",
        ];
        for width in [1, 2, 4, 8, 13, 16] {
            for s in samples {
                let (_, chunks) = encode(s, width).unwrap();
                assert_eq!(decode(&chunks, width), s, "width {width}, input {s}");
            }
        }
    }

    #[test]
    fn test_chunk_to_hex_pads_to_width() {
        assert_eq!(chunk_to_hex(0x7b, 8), "0000007b");
        assert_eq!(chunk_to_hex(0, 8), "00000000");
        assert_eq!(chunk_to_hex(0xdeadbeef, 8), "deadbeef");
        assert_eq!(chunk_to_hex(0x2a, 16), "000000000000002a");
    }
}
