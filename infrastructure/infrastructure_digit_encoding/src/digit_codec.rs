//! Digit Codec Module
//!
//! Provides digit encoding/decoding functionality: the decomposition of an
//! arbitrary precision integer into its positional base-`b` digits, and
//! the exact inverse reconstruction.
//! Based on `Integer.digits/2` and `Integer.undigits/2` from the Elixir
//! standard library.

use entities_numeric::BigNumber;
use malachite::Integer;

/// Encoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Base below the minimum of 2
    InvalidBase(u32),
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeError::InvalidBase(base) => write!(f, "invalid base {}", base),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Decoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Base below the minimum of 2
    InvalidBase(u32),
    /// A digit at or above the base
    InvalidDigit { digit: i64, base: u32 },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::InvalidBase(base) => write!(f, "invalid base {}", base),
            DecodeError::InvalidDigit { digit, base } => {
                write!(f, "invalid digit {} in base {}", digit, base)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Digit codec
pub struct DigitCodec;

impl DigitCodec {
    /// Decompose an integer into its base-`base` digits
    ///
    /// Digits are returned most-significant first. A negative input
    /// yields a sequence where every digit carries the negative sign;
    /// there is no separate sign marker.
    ///
    /// # Arguments
    ///
    /// * `value` - The integer to decompose
    /// * `base` - Radix, at least 2
    ///
    /// # Returns
    ///
    /// * `Ok(digits)` - Most-significant-first digit sequence, never empty
    /// * `Err(EncodeError)` - If the base is below 2
    ///
    /// # Examples
    ///
    /// ```
    /// use infrastructure_digit_encoding::DigitCodec;
    /// use entities_numeric::BigNumber;
    ///
    /// let digits = DigitCodec::digits(&BigNumber::from_i64(123), 10).unwrap();
    /// assert_eq!(digits, vec![1, 2, 3]);
    ///
    /// let digits = DigitCodec::digits(&BigNumber::from_i64(-170), 2).unwrap();
    /// assert_eq!(digits, vec![-1, 0, -1, 0, -1, 0, -1, 0]);
    /// ```
    pub fn digits(value: &BigNumber, base: u32) -> Result<Vec<i64>, EncodeError> {
        if base < 2 {
            return Err(EncodeError::InvalidBase(base));
        }
        let big_base = BigNumber::from_u32(base);

        // A magnitude below the base is its own single digit, zero included
        if value.abs().comp(&big_base) < 0 {
            // The magnitude is below a u32 base, so it fits in i64
            return Ok(vec![value.to_i64().unwrap_or(0)]);
        }
        // The base itself and its negation take the two-digit forms
        // [1, 0] and [-1, 0], not a single out-of-range digit
        if value.comp(&big_base) == 0 {
            return Ok(vec![1, 0]);
        }
        if value.comp(&big_base.negate()) == 0 {
            return Ok(vec![-1, 0]);
        }

        // General case: repeated truncating division, collecting the
        // remainders least-significant first. Each remainder carries the
        // dividend's sign, which is how negative inputs propagate their
        // sign onto every digit.
        let base_int = Integer::from(base);
        let zero = Integer::from(0);
        let mut v = value.as_integer().clone();
        let mut digits = Vec::new();
        while v != zero {
            let remainder = &v % &base_int;
            // The remainder's magnitude is below the base, so it fits in i64
            digits.push(i64::try_from(&remainder).unwrap_or(0));
            v = &v / &base_int;
        }
        digits.reverse();
        Ok(digits)
    }

    /// Reconstruct an integer from its base-`base` digits
    ///
    /// Exact left inverse of [`digits`](Self::digits) for every integer
    /// and base. Leading zero digits are consumed without affecting the
    /// accumulator, an asymmetry with `digits`, which never emits them.
    ///
    /// # Arguments
    ///
    /// * `digits` - Most-significant-first digit sequence; every digit
    ///   must be below the base
    /// * `base` - Radix, at least 2
    ///
    /// # Returns
    ///
    /// * `Ok(value)` - The reconstructed integer; 0 for an empty sequence
    /// * `Err(DecodeError)` - If the base is below 2, or a digit is at or
    ///   above the base
    ///
    /// # Examples
    ///
    /// ```
    /// use infrastructure_digit_encoding::DigitCodec;
    /// use entities_numeric::BigNumber;
    ///
    /// let value = DigitCodec::undigits(&[1, 2, 3], 10).unwrap();
    /// assert_eq!(value, BigNumber::from_i64(123));
    ///
    /// let value = DigitCodec::undigits(&[1, 4], 16).unwrap();
    /// assert_eq!(value, BigNumber::from_i64(20));
    /// ```
    pub fn undigits(digits: &[i64], base: u32) -> Result<BigNumber, DecodeError> {
        if base < 2 {
            return Err(DecodeError::InvalidBase(base));
        }

        // Leading zeros are absorbed before the fold starts
        let mut rest = digits;
        while let [0, tail @ ..] = rest {
            rest = tail;
        }

        match rest {
            [] => Ok(BigNumber::from_i64(0)),
            // A single digit below the base is the value verbatim
            [digit] if *digit < base as i64 => Ok(BigNumber::from_i64(*digit)),
            // Inverse of the digits(base) edge case
            [1, 0] => Ok(BigNumber::from_u32(base)),
            _ => {
                let base_int = Integer::from(base);
                let mut acc = Integer::from(0);
                for &digit in rest {
                    if digit >= base as i64 {
                        return Err(DecodeError::InvalidDigit { digit, base });
                    }
                    acc = &acc * &base_int + Integer::from(digit);
                }
                Ok(BigNumber::from_integer(acc))
            }
        }
    }
}
