//! Integer Facades
//!
//! Thin facades presenting the integer utilities under the external names
//! callers of Elixir's `Integer` module know: `floor_div`, `mod` (here
//! `modulo`, a reserved word in Rust), `digits`, `undigits`, `parse`,
//! `gcd`, `extended_gcd`, `pow`, `is_odd`, `is_even`.
//!
//! The facades add no behavior of their own; everything delegates to the
//! use cases and infrastructure layers.

use entities_numeric::BigNumber;
use infrastructure_digit_encoding::{DecodeError, DigitCodec, EncodeError};
use infrastructure_integer_scanning::{scan_integer, ScanError, ScanResult};
use usecases_integer_ops::{ArithOps, ArithmeticError, GuardOps};

/// Floored division, `None` on a zero divisor
pub fn floor_div(a: &BigNumber, n: &BigNumber) -> Option<BigNumber> {
    GuardOps::floor_div(a, n)
}

/// Modulo with the divisor's sign (direct path)
pub fn modulo(dividend: &BigNumber, divisor: &BigNumber) -> Result<BigNumber, ArithmeticError> {
    ArithOps::modulo(dividend, divisor)
}

/// Positional digits of `value` in base `base`, most-significant first
pub fn digits(value: &BigNumber, base: u32) -> Result<Vec<i64>, EncodeError> {
    DigitCodec::digits(value, base)
}

/// Integer reconstructed from a most-significant-first digit sequence
pub fn undigits(digits: &[i64], base: u32) -> Result<BigNumber, DecodeError> {
    DigitCodec::undigits(digits, base)
}

/// Leading integer literal of `input` in base `base`, with the remainder
pub fn parse(input: &str, base: u32) -> Result<ScanResult<'_>, ScanError> {
    scan_integer(input, base)
}

/// Greatest common divisor, never negative
pub fn gcd(a: &BigNumber, b: &BigNumber) -> BigNumber {
    ArithOps::gcd(a, b)
}

/// Bezout certificate `(g, m, n)` with `m*a + n*b == g`
pub fn extended_gcd(a: &BigNumber, b: &BigNumber) -> (BigNumber, BigNumber, BigNumber) {
    ArithOps::extended_gcd(a, b)
}

/// Exact integer power with a non-negative exponent
pub fn pow(base: &BigNumber, exponent: u64) -> BigNumber {
    ArithOps::pow(base, exponent)
}

/// Guard predicate: low bit set
pub fn is_odd(value: &BigNumber) -> bool {
    GuardOps::is_odd(value)
}

/// Guard predicate: low bit clear
pub fn is_even(value: &BigNumber) -> bool {
    GuardOps::is_even(value)
}
