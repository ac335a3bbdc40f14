//! Direct Arithmetic
//!
//! Provides the integer operations that run in ordinary call context and
//! may branch freely: the direct modulo path, greatest common divisor,
//! extended gcd, and exact integer exponentiation.

use entities_numeric::BigNumber;

/// Arithmetic errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Divisor was zero
    DivisionByZero,
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => {
                write!(f, "bad argument in arithmetic expression: division by zero")
            }
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Direct arithmetic operations
pub struct ArithOps;

impl ArithOps {
    /// Modulo, direct path
    ///
    /// Computes the native truncating remainder and corrects it by one
    /// divisor step when the signs differ, so the result always carries
    /// the divisor's sign. Must agree with
    /// [`GuardOps::modulo`](crate::guard::GuardOps::modulo) for every
    /// valid input.
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
    /// use usecases_integer_ops::arith::ArithOps;
    /// use entities_numeric::BigNumber;
    ///
    /// let result = ArithOps::modulo(&BigNumber::from_i64(-7), &BigNumber::from_i64(3)).unwrap();
    /// assert_eq!(result.to_i64(), Some(2));
    /// ```
    pub fn modulo(
        dividend: &BigNumber,
        divisor: &BigNumber,
    ) -> Result<BigNumber, ArithmeticError> {
        let remainder = dividend
            .rem(divisor)
            .ok_or(ArithmeticError::DivisionByZero)?;
        // Signs differ exactly when the product is negative
        if remainder.times(divisor).is_negative() {
            Ok(remainder.plus(divisor))
        } else {
            Ok(remainder)
        }
    }

    /// Greatest common divisor
    ///
    /// Iterative Euclid on the magnitudes. The result is never negative;
    /// `gcd(0, 0)` is 0.
    ///
    /// # Examples
    /// ```
    /// use usecases_integer_ops::arith::ArithOps;
    /// use entities_numeric::BigNumber;
    ///
    /// let g = ArithOps::gcd(&BigNumber::from_i64(-12), &BigNumber::from_i64(18));
    /// assert_eq!(g.to_i64(), Some(6));
    /// ```
    pub fn gcd(a: &BigNumber, b: &BigNumber) -> BigNumber {
        let mut x = a.abs();
        let mut y = b.abs();
        while !y.is_zero() {
            // y is nonzero here, so rem cannot fail
            let r = x.rem(&y).unwrap_or_else(|| BigNumber::from_i64(0));
            x = y;
            y = r;
        }
        x
    }

    /// Extended greatest common divisor
    ///
    /// Returns `(g, m, n)` with `g = gcd(a, b) >= 0` and
    /// `m * a + n * b == g`. Both operands zero give `(0, 0, 0)`.
    ///
    /// # Examples
    /// ```
    /// use usecases_integer_ops::arith::ArithOps;
    /// use entities_numeric::BigNumber;
    ///
    /// let (g, m, n) =
    ///     ArithOps::extended_gcd(&BigNumber::from_i64(240), &BigNumber::from_i64(46));
    /// assert_eq!(g.to_i64(), Some(2));
    /// assert_eq!(m.to_i64(), Some(-9));
    /// assert_eq!(n.to_i64(), Some(47));
    /// ```
    pub fn extended_gcd(a: &BigNumber, b: &BigNumber) -> (BigNumber, BigNumber, BigNumber) {
        let zero = BigNumber::from_i64(0);
        let one = BigNumber::from_i64(1);
        if a.is_zero() && b.is_zero() {
            return (zero.clone(), zero.clone(), zero);
        }

        let (mut old_r, mut r) = (a.clone(), b.clone());
        let (mut old_s, mut s) = (one.clone(), zero.clone());
        let (mut old_t, mut t) = (zero, one);
        while !r.is_zero() {
            // r is nonzero here, so the division cannot fail
            let q = match old_r.div(&r) {
                Some(q) => q,
                None => break,
            };
            let next_r = old_r.minus(&q.times(&r));
            old_r = std::mem::replace(&mut r, next_r);
            let next_s = old_s.minus(&q.times(&s));
            old_s = std::mem::replace(&mut s, next_s);
            let next_t = old_t.minus(&q.times(&t));
            old_t = std::mem::replace(&mut t, next_t);
        }

        // Keep the gcd non-negative; the certificate negates with it
        if old_r.is_negative() {
            (old_r.negate(), old_s.negate(), old_t.negate())
        } else {
            (old_r, old_s, old_t)
        }
    }

    /// Exact integer exponentiation by squaring
    ///
    /// The exponent type keeps the operation total: negative exponents
    /// are unrepresentable.
    ///
    /// # Examples
    /// ```
    /// use usecases_integer_ops::arith::ArithOps;
    /// use entities_numeric::BigNumber;
    ///
    /// assert_eq!(ArithOps::pow(&BigNumber::from_i64(2), 10).to_i64(), Some(1024));
    /// assert_eq!(ArithOps::pow(&BigNumber::from_i64(-3), 3).to_i64(), Some(-27));
    /// assert_eq!(ArithOps::pow(&BigNumber::from_i64(5), 0).to_i64(), Some(1));
    /// ```
    pub fn pow(base: &BigNumber, exponent: u64) -> BigNumber {
        let mut result = BigNumber::from_i64(1);
        let mut factor = base.clone();
        let mut exponent = exponent;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.times(&factor);
            }
            exponent >>= 1;
            if exponent > 0 {
                factor = factor.times(&factor);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::GuardOps;

    fn big(value: i64) -> BigNumber {
        BigNumber::from_i64(value)
    }

    #[test]
    fn test_modulo_reference_points() {
        assert_eq!(ArithOps::modulo(&big(5), &big(2)).unwrap().to_i64(), Some(1));
        assert_eq!(ArithOps::modulo(&big(6), &big(-4)).unwrap().to_i64(), Some(-2));
        assert_eq!(ArithOps::modulo(&big(-7), &big(3)).unwrap().to_i64(), Some(2));
        assert_eq!(ArithOps::modulo(&big(7), &big(-3)).unwrap().to_i64(), Some(-2));
        assert_eq!(ArithOps::modulo(&big(-6), &big(3)).unwrap().to_i64(), Some(0));
    }

    #[test]
    fn test_modulo_by_zero() {
        assert_eq!(
            ArithOps::modulo(&big(1), &big(0)),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_both_modulo_paths_agree() {
        for dividend in [-25i64, -9, -7, -1, 0, 1, 5, 6, 7, 24] {
            for divisor in [-5i64, -4, -3, -2, -1, 1, 2, 3, 4, 5] {
                let direct = ArithOps::modulo(&big(dividend), &big(divisor)).unwrap();
                let guarded = GuardOps::modulo(&big(dividend), &big(divisor)).unwrap();
                assert_eq!(direct, guarded, "paths for mod({}, {})", dividend, divisor);
            }
        }
    }

    #[test]
    fn test_gcd() {
        assert_eq!(ArithOps::gcd(&big(12), &big(18)).to_i64(), Some(6));
        assert_eq!(ArithOps::gcd(&big(-12), &big(18)).to_i64(), Some(6));
        assert_eq!(ArithOps::gcd(&big(12), &big(-18)).to_i64(), Some(6));
        assert_eq!(ArithOps::gcd(&big(0), &big(0)).to_i64(), Some(0));
        assert_eq!(ArithOps::gcd(&big(0), &big(-7)).to_i64(), Some(7));
        assert_eq!(ArithOps::gcd(&big(13), &big(17)).to_i64(), Some(1));
    }

    #[test]
    fn test_gcd_divides_both_operands() {
        for a in [-48i64, -30, -1, 0, 9, 30, 48] {
            for b in [-36i64, -20, 0, 1, 20, 36] {
                let g = ArithOps::gcd(&big(a), &big(b));
                assert!(!g.is_negative(), "gcd({}, {}) negative", a, b);
                if !g.is_zero() {
                    assert!(big(a).rem(&g).unwrap().is_zero(), "gcd({}, {}) | a", a, b);
                    assert!(big(b).rem(&g).unwrap().is_zero(), "gcd({}, {}) | b", a, b);
                }
            }
        }
    }

    #[test]
    fn test_extended_gcd_certificate() {
        for a in [-48i64, -30, 0, 9, 240] {
            for b in [-36i64, 0, 20, 46] {
                let (g, m, n) = ArithOps::extended_gcd(&big(a), &big(b));
                assert_eq!(g, ArithOps::gcd(&big(a), &big(b)), "gcd for ({}, {})", a, b);
                assert_eq!(
                    m.times(&big(a)).plus(&n.times(&big(b))),
                    g,
                    "certificate for ({}, {})",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_extended_gcd_both_zero() {
        let (g, m, n) = ArithOps::extended_gcd(&big(0), &big(0));
        assert!(g.is_zero());
        assert!(m.is_zero());
        assert!(n.is_zero());
    }

    #[test]
    fn test_pow() {
        assert_eq!(ArithOps::pow(&big(2), 0).to_i64(), Some(1));
        assert_eq!(ArithOps::pow(&big(2), 1).to_i64(), Some(2));
        assert_eq!(ArithOps::pow(&big(10), 6).to_i64(), Some(1_000_000));
        assert_eq!(ArithOps::pow(&big(-2), 11).to_i64(), Some(-2048));
        assert_eq!(ArithOps::pow(&big(0), 0).to_i64(), Some(1));
        assert_eq!(ArithOps::pow(&big(0), 5).to_i64(), Some(0));
    }

    #[test]
    fn test_pow_exceeds_machine_width() {
        let result = ArithOps::pow(&big(2), 64);
        assert!(result.to_i64().is_none());
        assert_eq!(result, big(2).times(&ArithOps::pow(&big(2), 63)));
    }
}
