//! Multiplication cross-checks against num-bigint for operand sizes on
//! both sides of the strategy cutoff.

use fatnum::{FatNum, KARATSUBA_CUTOFF};
use num_bigint::BigInt;
use num_traits::Zero;

// ============================================================================
// Helpers
// ============================================================================

fn parse(s: &str) -> FatNum {
    FatNum::from_decimal_str(s).unwrap()
}

fn check_product(a: &str, b: &str) {
    let got = parse(a).mul(&parse(b)).unwrap();
    let expected = a.parse::<BigInt>().unwrap() * b.parse::<BigInt>().unwrap();
    assert_eq!(got.to_decimal_string(), expected.to_string());
}

/// Deterministic digit string: a tiny LCG is plenty, the digits only
/// need to be reproducible, not uniform.
fn pseudo_digits(len: usize, seed: u64) -> String {
    let mut state = seed;
    let mut out = String::with_capacity(len);
    for i in 0..len {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let digit = ((state >> 33) % 10) as u8;
        // no leading zero, the parsed digit count drives chunk sizing
        let digit = if i == 0 { digit % 9 + 1 } else { digit };
        out.push(char::from(b'0' + digit));
    }
    out
}

// ============================================================================
// Fixed scenarios
// ============================================================================

#[test]
fn eighty_digit_repeating_operands() {
    check_product(&"1234".repeat(20), &"5678".repeat(20));
}

#[test]
fn squares_of_all_nines() {
    // (10^n - 1)^2 has the closed form (n-1) nines, 8, (n-1) zeros, 1
    for n in [1, 9, 37, 250] {
        let nines = "9".repeat(n);
        let got = parse(&nines).mul(&parse(&nines)).unwrap();
        let expected = if n == 1 {
            "81".to_string()
        } else {
            format!("{}8{}1", "9".repeat(n - 1), "0".repeat(n - 1))
        };
        assert_eq!(got.to_decimal_string(), expected, "n = {n}");
    }
}

#[test]
fn power_of_ten_shifts_digits() {
    let shift = format!("1{}", "0".repeat(120));
    let operand = pseudo_digits(95, 11);
    let got = parse(&operand).mul(&parse(&shift)).unwrap();
    assert_eq!(got.to_decimal_string(), format!("{}{}", operand, "0".repeat(120)));
}

// ============================================================================
// Recursive path (either operand below the cutoff)
// ============================================================================

#[test]
fn below_cutoff_products_match_reference() {
    let sizes = [(1, 1), (3, 7), (40, 41), (120, 119), (300, 280)];
    for (la, lb) in sizes {
        let a = pseudo_digits(la, la as u64);
        let b = pseudo_digits(lb, lb as u64 + 1000);
        assert!(parse(&a).chunk_count() < KARATSUBA_CUTOFF);
        check_product(&a, &b);
    }
}

#[test]
fn asymmetric_sizes_match_reference() {
    // A tiny factor against a huge one short-circuits to the base case
    // at the top of the recursion.
    let big = pseudo_digits(2000, 42);
    check_product(&big, "7");
    check_product("7", &big);
    check_product(&big, &pseudo_digits(60, 43));
}

#[test]
fn signed_products_match_reference() {
    let a = pseudo_digits(150, 5);
    let b = pseudo_digits(170, 6);
    check_product(&format!("-{a}"), &b);
    check_product(&a, &format!("-{b}"));
    check_product(&format!("-{a}"), &format!("-{b}"));
}

#[test]
fn full_width_chunks_match_reference() {
    // Width 16 fills each chunk with a whole u64; operands past the
    // two-chunk base case push full 64-bit carries through the split
    // and recombine steps.
    let a = pseudo_digits(90, 21);
    let b = pseudo_digits(75, 22);
    let x = FatNum::from_decimal_str_with_width(&a, 16).unwrap();
    let y = FatNum::from_decimal_str_with_width(&b, 16).unwrap();
    assert!(x.chunk_count() > 2);
    assert!(y.chunk_count() > 2);
    let expected = a.parse::<BigInt>().unwrap() * b.parse::<BigInt>().unwrap();
    assert_eq!(x.mul(&y).unwrap().to_decimal_string(), expected.to_string());
}

// ============================================================================
// Large-number path (both operands at or past the cutoff)
// ============================================================================

#[test]
fn above_cutoff_products_match_reference() {
    // 1300 digits sit around 135 chunks at the default width, well
    // past the switch point on both sides.
    let a = pseudo_digits(1300, 7);
    let b = pseudo_digits(1300, 8);
    assert!(parse(&a).chunk_count() >= KARATSUBA_CUTOFF);
    assert!(parse(&b).chunk_count() >= KARATSUBA_CUTOFF);
    check_product(&a, &b);
}

#[test]
fn straddling_the_cutoff_matches_reference() {
    // One side above, one side below: the recursive path must win.
    let small = pseudo_digits(400, 9);
    let large = pseudo_digits(1500, 10);
    assert!(parse(&small).chunk_count() < KARATSUBA_CUTOFF);
    assert!(parse(&large).chunk_count() >= KARATSUBA_CUTOFF);
    check_product(&small, &large);
}

#[test]
fn huge_square_matches_reference() {
    let a = pseudo_digits(1024, 77);
    let got = parse(&a).mul(&parse(&a)).unwrap();
    let reference = a.parse::<BigInt>().unwrap();
    assert_eq!(got.to_decimal_string(), (&reference * &reference).to_string());
}

#[test]
fn zero_times_huge_is_zero() {
    let digits = pseudo_digits(1300, 3);
    let a = parse(&digits);
    let product = a.mul(&FatNum::zero(a.chunk_width())).unwrap();
    assert!(product.is_zero());
    let expected = digits.parse::<BigInt>().unwrap() * BigInt::zero();
    assert_eq!(product.to_decimal_string(), expected.to_string());
}
