//! Periodic continued fractions of quadratic irrationals
//!
//! The square root of a non-square integer has an eventually-periodic
//! continued fraction, which is the engine behind Pell-equation problems:
//! truncating the expansion gives rational convergents p/q whose error terms
//! p^2 - n*q^2 cycle through small values, hitting +-1 infinitely often.

use num_bigint::BigInt;
use num_integer::gcd;
use num_rational::BigRational;

/// Continued fraction `[head_0; head_1, ..., (tail_0, ..., tail_m)]` with an
/// optionally repeating tail.
///
/// `tail == None` means the expansion terminates (the value is rational).
///
/// # Examples
///
/// ```
/// use puzzle_math::QuadraticCFrac;
///
/// let cf = QuadraticCFrac::sqrt(23);
/// assert_eq!(cf.head(), [4]);
/// assert_eq!(cf.tail(), Some(&[1, 3, 1, 8][..]));
/// assert_eq!(cf.period(), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadraticCFrac {
    head: Vec<u64>,
    tail: Option<Vec<u64>>,
}

impl QuadraticCFrac {
    /// Continued fraction of the square root of `n`.
    ///
    /// Tracks the residual quantity (a + b*sqrt(n)) / d as an integer triple:
    /// repeatedly split off the integer part, then invert and rationalize
    /// the denominator. Quadratic irrationals revisit a previous triple after
    /// finitely many steps, and the first repeat marks the periodic tail.
    ///
    /// A perfect square yields the degenerate terminating form with a single
    /// coefficient and no tail; callers that need a period must check
    /// [`period`](Self::period) for `None`.
    pub fn sqrt(n: u64) -> Self {
        let root = n.isqrt();
        if root * root == n {
            return Self { head: vec![root], tail: None };
        }

        // i128 throughout: the intermediate products reach a few multiples of
        // n, which already overflows i64 for radicands in the upper u64 range.
        let (mut a, mut b, mut d) = (0i128, 1i128, 1i128);
        let mut history: Vec<(i128, i128, i128)> = Vec::new();
        let mut coeffs: Vec<u64> = Vec::new();

        loop {
            if let Some(start) = history.iter().position(|&seen| seen == (a, b, d)) {
                let tail = coeffs.split_off(start);
                return Self { head: coeffs, tail: Some(tail) };
            }
            history.push((a, b, d));

            // Integer part of (a + b*sqrt(n)) / d. With b, d > 0 and sqrt(n)
            // irrational, floor((a + b*sqrt(n)) / d) = floor((a + floor(b*sqrt(n))) / d),
            // so integer arithmetic is exact where floating point would not be.
            let b_root = ((b as u128) * (b as u128) * u128::from(n)).isqrt() as i128;
            let int_part = (a + b_root).div_euclid(d);
            a -= int_part * d;
            coeffs.push(int_part as u64);

            // Invert: d / (a + b*sqrt(n)) = d*(-a + b*sqrt(n)) / (b^2*n - a^2).
            // The new denominator cannot be zero here, since that would make
            // sqrt(n) = a/b rational.
            (a, b, d) = (-d * a, d * b, b * b * i128::from(n) - a * a);

            let g = gcd(gcd(a, b), d);
            (a, b, d) = (a / g, b / g, d / g);
        }
    }

    /// Non-repeating leading coefficients.
    pub fn head(&self) -> &[u64] {
        &self.head
    }

    /// The repeating tail, or `None` for a terminating expansion.
    pub fn tail(&self) -> Option<&[u64]> {
        self.tail.as_deref()
    }

    /// Lazy coefficient stream: the head, then the tail cycled forever.
    ///
    /// Finite when the expansion terminates, infinite otherwise. A fresh call
    /// restarts from the first coefficient.
    pub fn coeffs(&self) -> impl Iterator<Item = u64> + '_ {
        let tail = self.tail.as_deref().unwrap_or(&[]);
        self.head.iter().chain(tail.iter().cycle()).copied()
    }

    /// Length of the repeating tail, or `None` for a terminating expansion.
    pub fn period(&self) -> Option<usize> {
        self.tail.as_ref().map(Vec::len)
    }
}

/// Fold the first `depth` coefficients into an exact rational.
///
/// Evaluated right to left as value = c_i + 1/value. Exact big-rational
/// arithmetic is required, not a nicety: convergent numerators grow
/// exponentially and some callers digit-sum them.
///
/// # Panics
///
/// If `depth` is zero or the stream yields no coefficients.
///
/// # Examples
///
/// ```
/// use num_bigint::BigInt;
/// use puzzle_math::{QuadraticCFrac, nth_convergent};
///
/// let cf = QuadraticCFrac::sqrt(2);
/// let c = nth_convergent(cf.coeffs(), 4);
/// assert_eq!(c.numer(), &BigInt::from(17));
/// assert_eq!(c.denom(), &BigInt::from(12));
/// ```
pub fn nth_convergent(coeffs: impl IntoIterator<Item = u64>, depth: usize) -> BigRational {
    let coeffs: Vec<u64> = coeffs.into_iter().take(depth).collect();
    let (&last, rest) = coeffs.split_last().expect("convergent needs at least one coefficient");

    let mut value = BigRational::from_integer(BigInt::from(last));
    for &c in rest.iter().rev() {
        value = BigRational::from_integer(BigInt::from(c)) + value.recip();
    }
    value
}
