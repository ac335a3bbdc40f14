//! Guard-Safe Arithmetic
//!
//! Provides arithmetic that may appear inside guard expressions:
//! - Branch-free sign and floored division (sign, floor_div)
//! - The guard-context modulo path (modulo)
//! - Parity predicates (is_odd, is_even)
//!
//! Guard expressions forbid ordinary conditional branching, so everything
//! here is derived from the primitives a guard may use: addition,
//! subtraction, multiplication, truncating div/rem, abs, and max.

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

use crate::arith::ArithmeticError;
use entities_numeric::BigNumber;

/// Guard-safe arithmetic operations
pub struct GuardOps;

impl GuardOps {
    /// Branch-free sign function
    ///
    /// Computes `div(x, max(abs(x), 1))`: 0 for zero, 1 for positive
    /// values, -1 for negative values, without conditional branching and
    /// without risking a division by zero.
    ///
    /// # Arguments
    /// * `x` - Value to take the sign of
    ///
    /// # Returns
    /// -1, 0, or 1 as a big number
    ///
    /// # Examples
    /// ```
    /// use usecases_integer_ops::guard::GuardOps;
    /// use entities_numeric::BigNumber;
    ///
    /// assert_eq!(GuardOps::sign(&BigNumber::from_i64(-17)).to_i64(), Some(-1));
    /// assert_eq!(GuardOps::sign(&BigNumber::from_i64(0)).to_i64(), Some(0));
    /// assert_eq!(GuardOps::sign(&BigNumber::from_i64(42)).to_i64(), Some(1));
    /// ```
    pub fn sign(x: &BigNumber) -> BigNumber {
        let one = BigNumber::from_i64(1);
        // The divisor is at least 1, so the division cannot fail
        x.div(&x.abs().max(&one))
            .unwrap_or_else(|| BigNumber::from_i64(0))
    }

    /// Floored division: the quotient rounded toward negative infinity
    ///
    /// The native truncating division rounds toward zero instead. The
    /// correction term is derived without branching: with
    /// `r = rem(a, n) * n`, the truncating quotient is exact or already
    /// floored exactly when `r >= 0`, and one too high when `r < 0`, so
    /// `div(sign(r) - 1, 2)` is 0 in the first case and -1 in the second.
    ///
    /// # Arguments
    /// * `a` - Dividend
    /// * `n` - Divisor
    ///
    /// # Returns
    /// * `Some(quotient)` - Floor of `a / n`
    /// * `None` - If `n` is zero (the native division primitive's failure)
    ///
    /// # Examples
    /// ```
    /// use usecases_integer_ops::guard::GuardOps;
    /// use entities_numeric::BigNumber;
    ///
    /// let floor_div = |a: i64, n: i64| {
    ///     GuardOps::floor_div(&BigNumber::from_i64(a), &BigNumber::from_i64(n))
    ///         .unwrap()
    ///         .to_i64()
    ///         .unwrap()
    /// };
    ///
    /// assert_eq!(floor_div(5, 2), 2);
    /// assert_eq!(floor_div(6, -4), -2);
    /// assert_eq!(floor_div(-7, 3), -3);
    /// assert_eq!(floor_div(-6, 3), -2);
    /// ```
    pub fn floor_div(a: &BigNumber, n: &BigNumber) -> Option<BigNumber> {
        let one = BigNumber::from_i64(1);
        let two = BigNumber::from_i64(2);
        let quotient = a.div(n)?;
        // r < 0 exactly when rem(a, n) and n differ in sign
        let r = a.rem(n)?.times(n);
        let correction = Self::sign(&r).minus(&one).div(&two)?;
        Some(quotient.plus(&correction))
    }

    /// Modulo, guard-context path
    ///
    /// Computes `a - n * floor_div(a, n)`, staying inside the guard-safe
    /// arithmetic subset. The result carries the divisor's sign. Must
    /// agree with [`ArithOps::modulo`](crate::arith::ArithOps::modulo)
    /// for every valid input.
    ///
    /// # Arguments
    /// * `dividend` - Value to reduce
    /// * `divisor` - Modulus
    ///
    /// # Returns
    /// * `Ok(remainder)` - Floored-division remainder
    /// * `Err(ArithmeticError)` - If the divisor is zero
    ///
    /// # Examples
    /// ```
    /// use usecases_integer_ops::guard::GuardOps;
    /// use entities_numeric::BigNumber;
    ///
    /// let result = GuardOps::modulo(&BigNumber::from_i64(6), &BigNumber::from_i64(-4)).unwrap();
    /// assert_eq!(result.to_i64(), Some(-2));
    /// ```
    pub fn modulo(
        dividend: &BigNumber,
        divisor: &BigNumber,
    ) -> Result<BigNumber, ArithmeticError> {
        let quotient =
            Self::floor_div(dividend, divisor).ok_or(ArithmeticError::DivisionByZero)?;
        Ok(dividend.minus(&divisor.times(&quotient)))
    }

    /// Check whether a value is odd
    ///
    /// Tests the low bit with a two's complement bitwise AND, so negative
    /// odd values are recognized as odd. Guard-safe: no branching.
    ///
    /// # Examples
    /// ```
    /// use usecases_integer_ops::guard::GuardOps;
    /// use entities_numeric::BigNumber;
    ///
    /// assert!(GuardOps::is_odd(&BigNumber::from_i64(5)));
    /// assert!(GuardOps::is_odd(&BigNumber::from_i64(-3)));
    /// assert!(!GuardOps::is_odd(&BigNumber::from_i64(0)));
    /// ```
    pub fn is_odd(value: &BigNumber) -> bool {
        !value.bitand(&BigNumber::from_i64(1)).is_zero()
    }

    /// Check whether a value is even
    ///
    /// # Examples
    /// ```
    /// use usecases_integer_ops::guard::GuardOps;
    /// use entities_numeric::BigNumber;
    ///
    /// assert!(GuardOps::is_even(&BigNumber::from_i64(-4)));
    /// assert!(GuardOps::is_even(&BigNumber::from_i64(0)));
    /// assert!(!GuardOps::is_even(&BigNumber::from_i64(7)));
    /// ```
    pub fn is_even(value: &BigNumber) -> bool {
        value.bitand(&BigNumber::from_i64(1)).is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(value: i64) -> BigNumber {
        BigNumber::from_i64(value)
    }

    #[test]
    fn test_sign() {
        assert_eq!(GuardOps::sign(&big(123)).to_i64(), Some(1));
        assert_eq!(GuardOps::sign(&big(-123)).to_i64(), Some(-1));
        assert_eq!(GuardOps::sign(&big(0)).to_i64(), Some(0));
        assert_eq!(GuardOps::sign(&big(1)).to_i64(), Some(1));
        assert_eq!(GuardOps::sign(&big(-1)).to_i64(), Some(-1));
    }

    #[test]
    fn test_floor_div_matches_mathematical_floor() {
        let cases = [
            (5i64, 2i64, 2i64),
            (6, -4, -2),
            (-7, 3, -3),
            (7, -3, -3),
            (-6, 3, -2),
            (6, 3, 2),
            (0, 5, 0),
            (0, -5, 0),
            (1, 36, 0),
            (-1, 36, -1),
        ];
        for (a, n, expected) in cases {
            let result = GuardOps::floor_div(&big(a), &big(n)).unwrap();
            assert_eq!(result.to_i64(), Some(expected), "floor_div({}, {})", a, n);
        }
    }

    #[test]
    fn test_floor_div_by_zero() {
        assert_eq!(GuardOps::floor_div(&big(5), &big(0)), None);
    }

    #[test]
    fn test_modulo_sign_follows_divisor() {
        assert_eq!(GuardOps::modulo(&big(5), &big(2)).unwrap().to_i64(), Some(1));
        assert_eq!(GuardOps::modulo(&big(6), &big(-4)).unwrap().to_i64(), Some(-2));
        assert_eq!(GuardOps::modulo(&big(-7), &big(3)).unwrap().to_i64(), Some(2));
        assert_eq!(GuardOps::modulo(&big(7), &big(-3)).unwrap().to_i64(), Some(-2));
    }

    #[test]
    fn test_modulo_by_zero() {
        assert_eq!(
            GuardOps::modulo(&big(5), &big(0)),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_division_identity() {
        // a == n * floor_div(a, n) + mod(a, n) across all sign combinations
        for a in [-9i64, -7, -2, -1, 0, 1, 2, 7, 9] {
            for n in [-4i64, -3, -1, 1, 3, 4] {
                let quotient = GuardOps::floor_div(&big(a), &big(n)).unwrap();
                let remainder = GuardOps::modulo(&big(a), &big(n)).unwrap();
                assert_eq!(
                    big(n).times(&quotient).plus(&remainder),
                    big(a),
                    "identity for a={}, n={}",
                    a,
                    n
                );
            }
        }
    }

    #[test]
    fn test_parity() {
        assert!(GuardOps::is_odd(&big(1)));
        assert!(GuardOps::is_odd(&big(-1)));
        assert!(GuardOps::is_odd(&big(i64::MAX)));
        assert!(GuardOps::is_even(&big(0)));
        assert!(GuardOps::is_even(&big(-2)));
        assert!(GuardOps::is_even(&big(i64::MIN)));
        for value in -6i64..=6 {
            assert_ne!(
                GuardOps::is_odd(&big(value)),
                GuardOps::is_even(&big(value)),
                "parity of {}",
                value
            );
        }
    }
}
