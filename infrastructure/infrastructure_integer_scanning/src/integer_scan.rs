//! Integer Scanner (Integer.parse equivalent)
//!
//! Scans a leading integer literal out of a text buffer. This is a
//! single-pass scanner: it consumes an optional sign and then the maximal
//! run of valid digit characters for the requested base, never backtracks
//! past an accepted byte, and returns the unconsumed remainder.
//! Based on `Integer.parse/2` from the Elixir standard library.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * This file is derived from work copyrighted by Plataformatec and the
 * Elixir Team 2012-2025.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 *
 * Creation productivity increased for code in this file by using AALang and GAB.
 * See https://github.com/yenrab/AALang-Gab
 */

use entities_numeric::BigNumber;

/// Smallest accepted radix
pub const MIN_BASE: u32 = 2;
/// Largest accepted radix: digits 0-9 plus letters A-Z/a-z as 10-35
pub const MAX_BASE: u32 = 36;

/// Scan outcome
#[derive(Debug, Clone, PartialEq)]
pub enum ScanResult<'a> {
    /// A leading integer literal was found
    Match {
        /// The parsed integer, sign applied
        value: BigNumber,
        /// Unconsumed remainder, starting at the first invalid character
        rest: &'a str,
    },
    /// No valid digit at the start of the input
    NoMatch,
}

/// Scanner error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// Base outside the [2, 36] window
    InvalidBase(u32),
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::InvalidBase(base) => write!(f, "invalid base {}", base),
        }
    }
}

impl std::error::Error for ScanError {}

/// Scanner state
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    base: u32,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, base: u32) -> Self {
        Self {
            input,
            pos: 0,
            base,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    // The scanner only ever advances past ASCII bytes, so pos is always
    // a valid char boundary.
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn scan(mut self) -> ScanResult<'a> {
        let negative = match self.peek() {
            Some(b'-') => {
                self.advance();
                true
            }
            Some(b'+') => {
                self.advance();
                false
            }
            _ => false,
        };

        let big_base = BigNumber::from_u32(self.base);
        let mut value = BigNumber::from_i64(0);
        let mut digit_count = 0usize;
        while let Some(byte) = self.peek() {
            match digit_value(byte, self.base) {
                Some(digit) => {
                    value = value.mul_add(&big_base, &BigNumber::from_u32(digit));
                    digit_count += 1;
                    self.advance();
                }
                None => break,
            }
        }

        // A bare sign is not a match; the whole scan fails with it
        if digit_count == 0 {
            return ScanResult::NoMatch;
        }

        if negative {
            value = value.negate();
        }
        ScanResult::Match {
            value,
            rest: self.rest(),
        }
    }
}

/// Map an ASCII byte to its digit value in the given base
///
/// Letters are case-insensitive and carry the values 10 through 35.
/// Returns None for any byte whose value is not below the base.
fn digit_value(byte: u8, base: u32) -> Option<u32> {
    let value = match byte {
        b'0'..=b'9' => (byte - b'0') as u32,
        b'A'..=b'Z' => (byte - b'A') as u32 + 10,
        b'a'..=b'z' => (byte - b'a') as u32 + 10,
        _ => return None,
    };
    if value < base {
        Some(value)
    } else {
        None
    }
}

/// Scan a leading integer literal out of a text buffer
///
/// This is the main entry point for the scanner. It consumes an optional
/// single `+` or `-` and then the maximal run of valid base-`base` digit
/// characters, folding them left to right. Scanning stops at the first
/// invalid character; the remainder from that character onward is handed
/// back untouched. If no digit was consumed, the outcome is
/// [`ScanResult::NoMatch`] and any consumed sign is discarded with it.
///
/// # Arguments
/// * `input` - Text buffer to scan
/// * `base` - Radix, 2 through 36
///
/// # Returns
/// * `Ok(ScanResult)` - Match with value and remainder, or NoMatch
/// * `Err(ScanError)` - If the base is outside [2, 36]
///
/// # Examples
/// ```
/// use infrastructure_integer_scanning::{scan_integer, ScanResult};
/// use entities_numeric::BigNumber;
///
/// let outcome = scan_integer("34.5", 10).unwrap();
/// assert_eq!(
///     outcome,
///     ScanResult::Match {
///         value: BigNumber::from_i64(34),
///         rest: ".5",
///     }
/// );
///
/// assert_eq!(scan_integer("three", 10).unwrap(), ScanResult::NoMatch);
/// ```
pub fn scan_integer(input: &str, base: u32) -> Result<ScanResult<'_>, ScanError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(ScanError::InvalidBase(base));
    }
    Ok(Scanner::new(input, base).scan())
}
