//! Integer sequences: figurate numbers, partitions, and friends

use std::collections::HashSet;

use itertools::iterate;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Triangle number. Convention: 0 -> 0, 1 -> 1, 2 -> 3.
pub fn triangle(n: u64) -> u64 {
    n * (n + 1) / 2
}

pub fn square(n: u64) -> u64 {
    n * n
}

/// Pentagonal number. Convention: 0 -> 0, 1 -> 1, 2 -> 5.
///
/// Signed so the generalized indices -1, -2, ... of the partition recurrence
/// work too: `pentagonal(-k) = k * (3k + 1) / 2`.
pub fn pentagonal(n: i64) -> i64 {
    n * (3 * n - 1) / 2
}

// The quadratics below are arranged so the subtraction comes last and is
// dominated by the square term, keeping the unsigned math safe at n = 0.
pub fn hexagonal(n: u64) -> u64 {
    2 * n * n - n
}

pub fn heptagonal(n: u64) -> u64 {
    (5 * n * n - 3 * n) / 2
}

pub fn octagonal(n: u64) -> u64 {
    3 * n * n - 2 * n
}

/// Sum of the first `n` squares, 1^2 + 2^2 + ... + n^2 = n(n+1)(2n+1)/6.
pub fn sum_of_n_squares(n: u64) -> u64 {
    n * (n + 1) * (2 * n + 1) / 6
}

/// Lazy Fibonacci-style sequence from arbitrary seeds: a, b, a+b, ...
pub fn general_fibonacci(a: u64, b: u64) -> impl Iterator<Item = u64> {
    iterate((a, b), |&(x, y)| (y, x + y)).map(|(x, _)| x)
}

/// Lazy Fibonacci numbers: 0, 1, 1, 2, 3, 5, ...
pub fn fibonacci() -> impl Iterator<Item = u64> {
    general_fibonacci(0, 1)
}

/// Binomial coefficient C(n, k); 0 when k > n.
///
/// Built up one factor at a time as C(n, i+1) = C(n, i) * (n - i) / (i + 1),
/// which keeps every intermediate division exact.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |c, i| c * (n - i) / (i + 1))
}

/// Decimal digits of `n`, most significant first. `0` -> `[0]`.
pub fn to_digits(n: u64) -> Vec<u8> {
    let mut digits = Vec::new();
    let mut n = n;
    loop {
        digits.push((n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Reassemble a number from decimal digits, most significant first.
pub fn from_digits(digits: impl IntoIterator<Item = u8>) -> u64 {
    digits.into_iter().fold(0, |acc, d| acc * 10 + u64::from(d))
}

/// Number of decimal digits of a positive integer.
pub fn num_digits(n: u64) -> u32 {
    assert!(n > 0, "input must be positive");
    n.ilog10() + 1
}

/// Whether the decimal expansion reads the same in both directions.
pub fn is_palindrome(n: u64) -> bool {
    let digits = to_digits(n);
    digits.iter().eq(digits.iter().rev())
}

/// All values of a non-decreasing sequence `f` landing in `[start, end)`.
pub fn values_in_range(f: impl Fn(u64) -> u64, start: u64, end: u64) -> Vec<u64> {
    assert!(start <= end);
    (0..)
        .map(f)
        .skip_while(|&value| value < start)
        .take_while(|&value| value < end)
        .collect()
}

/// Memoized membership test for a strictly increasing integer sequence.
///
/// Caches every value of `f` up to the largest query seen so far, so repeated
/// lookups (is this number triangular? hexagonal?) cost one set probe.
pub struct IncreasingSeq<F: Fn(u64) -> u64> {
    f: F,
    max_index: u64,
    max_value: u64,
    seen: HashSet<u64>,
}

impl<F: Fn(u64) -> u64> IncreasingSeq<F> {
    pub fn new(f: F) -> Self {
        let first = f(0);
        Self { f, max_index: 0, max_value: first, seen: HashSet::from([first]) }
    }

    /// Whether `n` appears in the sequence.
    pub fn contains(&mut self, n: u64) -> bool {
        while n > self.max_value {
            self.max_index += 1;
            self.max_value = (self.f)(self.max_index);
            self.seen.insert(self.max_value);
        }
        self.seen.contains(&n)
    }
}

/// Partition counts p(n) by Euler's pentagonal-number recurrence.
///
/// p(n) counts the ways to write n as a sum of positive integers, ignoring
/// order. The memo is a dense vec filled bottom-up, one index at a time, so
/// a query for p(n) costs O(n * sqrt(n)) the first time and a lookup after.
///
/// An optional modulus keeps every intermediate sum reduced, for callers that
/// only need p(n) mod M (counts themselves outgrow u64 before n = 400).
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use puzzle_math::Partitions;
///
/// let mut partitions = Partitions::new();
/// assert_eq!(partitions.count(5), BigUint::from(7u32));
/// assert_eq!(partitions.count(100), BigUint::from(190_569_292u64));
/// ```
pub struct Partitions {
    counts: Vec<BigUint>,
    modulus: Option<BigInt>,
}

impl Partitions {
    /// Exact partition counts. p(0) = 1.
    pub fn new() -> Self {
        Self { counts: vec![BigUint::one()], modulus: None }
    }

    /// Partition counts reduced modulo `modulus` throughout.
    pub fn with_modulus(modulus: u64) -> Self {
        assert!(modulus > 1, "modulus must exceed 1");
        Self { counts: vec![BigUint::one()], modulus: Some(BigInt::from(modulus)) }
    }

    /// p(n), or p(n) mod M for a modular table.
    pub fn count(&mut self, n: usize) -> BigUint {
        while self.counts.len() <= n {
            self.extend_one();
        }
        self.counts[n].clone()
    }

    /// Compute p(m) for the next uncached index m from the recurrence
    /// p(m) = sum over k >= 1 of (-1)^(k+1) * [p(m - g_k) + p(m - g_-k)]
    /// with g_k the generalized pentagonal numbers. Terms with g > m vanish
    /// (p of a negative argument is zero).
    fn extend_one(&mut self) {
        let m = self.counts.len();
        let mut total = BigInt::zero();

        for k in 1i64.. {
            let add_positive = k % 2 == 1;
            for g in [pentagonal(k), pentagonal(-k)] {
                let g = g as usize;
                if g > m {
                    continue;
                }
                let term = BigInt::from(self.counts[m - g].clone());
                if add_positive {
                    total += term;
                } else {
                    total -= term;
                }
            }
            if pentagonal(-k) as usize >= m {
                break;
            }
        }

        if let Some(modulus) = &self.modulus {
            total = total.mod_floor(modulus);
        }
        let count = total.to_biguint().expect("partition count cannot be negative");
        self.counts.push(count);
    }
}

impl Default for Partitions {
    fn default() -> Self {
        Self::new()
    }
}
