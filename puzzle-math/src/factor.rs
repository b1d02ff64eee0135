//! Prime factors and the arithmetic functions derived from them
//!
//! A factorization is an increasing sequence of [`Factor`] values, one per
//! distinct prime. The functions here are pure: they consume a factor sequence
//! (usually fresh out of [`PrimeCache::factor`](crate::PrimeCache::factor))
//! and never touch the cache themselves.

/// One prime/multiplicity pair of a factorization.
///
/// Ordering is lexicographic by `(prime, multiplicity)`, so the maximum of a
/// factor sequence is the largest prime factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Factor {
    /// The prime base
    pub prime: u64,
    /// How many times the prime divides the factored number
    pub multiplicity: u32,
}

impl Factor {
    /// Compute the value p^k this factor contributes.
    pub fn value(&self) -> u64 {
        self.prime.pow(self.multiplicity)
    }
}

/// Number of distinct primes dividing the factored number.
pub fn num_distinct_prime_factors(factors: impl IntoIterator<Item = Factor>) -> usize {
    factors.into_iter().count()
}

/// Number of divisors of the factored number.
///
/// If n = prod p_i^k_i, the divisor count is prod (k_i + 1).
///
/// # Examples
///
/// ```
/// use puzzle_math::{PrimeCache, num_divisors};
///
/// let mut cache = PrimeCache::new();
/// let factors = cache.factor(28).unwrap();
/// assert_eq!(num_divisors(factors), 6); // 1, 2, 4, 7, 14, 28
/// ```
pub fn num_divisors(factors: impl IntoIterator<Item = Factor>) -> u64 {
    factors
        .into_iter()
        .map(|f| u64::from(f.multiplicity) + 1)
        .product()
}

/// Sum of all divisors of the factored number, including itself.
///
/// Each prime contributes 1 + p + ... + p^k = (p^(k+1) - 1)/(p - 1); the
/// division is exact by the geometric-series identity. The per-prime terms
/// are widened to u128 because p^(k+1) exceeds u64 whenever p^k is within a
/// factor p of u64::MAX, even though the divisor sum itself still fits.
///
/// # Panics
///
/// If the divisor sum exceeds `u64::MAX`.
pub fn sum_divisors(factors: impl IntoIterator<Item = Factor>) -> u64 {
    let total: u128 = factors
        .into_iter()
        .map(|f| {
            let p = u128::from(f.prime);
            (p.pow(f.multiplicity + 1) - 1) / (p - 1)
        })
        .product();
    u64::try_from(total).expect("divisor sum exceeds u64")
}

/// Euler's totient: how many integers in [1, n] are coprime to n.
///
/// Computed as n * prod (p - 1) / prod p. The denominator is the radical of
/// n, which divides n, so dividing n first keeps everything exact.
pub fn totient(n: u64, factors: impl IntoIterator<Item = Factor>) -> u64 {
    let (num, den) = factors
        .into_iter()
        .fold((1u64, 1u64), |(num, den), f| (num * (f.prime - 1), den * f.prime));
    n / den * num
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimeCache;

    fn factors_of(n: u64) -> Vec<Factor> {
        PrimeCache::new().factor(n).unwrap().collect()
    }

    #[test]
    fn factor_ordering_is_by_prime_first() {
        let small = Factor { prime: 3, multiplicity: 10 };
        let large = Factor { prime: 7, multiplicity: 1 };
        assert!(small < large);

        // Largest prime factor of 13195 = 5 * 7 * 13 * 29
        let largest = factors_of(13195).into_iter().max().unwrap();
        assert_eq!(largest.prime, 29);
    }

    #[test]
    fn divisor_count_of_28() {
        assert_eq!(num_divisors(factors_of(28)), 6);
        assert_eq!(num_divisors(factors_of(1)), 1);
        assert_eq!(num_divisors(factors_of(97)), 2);
    }

    #[test]
    fn divisor_sum_of_perfect_numbers() {
        // Perfect numbers: sum of divisors is twice the number
        for n in [6, 28, 496, 8128] {
            assert_eq!(sum_divisors(factors_of(n)), 2 * n);
        }
    }

    #[test]
    fn divisor_sum_of_primes_past_u32() {
        // p^2 no longer fits in u64 for these, but sigma(p) = p + 1 does
        let p = 4_294_967_311; // 2^32 + 15
        assert_eq!(sum_divisors(factors_of(p)), p + 1);
        assert_eq!(
            sum_divisors([Factor { prime: 2, multiplicity: 1 }, Factor { prime: p, multiplicity: 1 }]),
            3 * (p + 1)
        );
    }

    #[test]
    fn totient_of_small_numbers() {
        let expected = [1, 1, 2, 2, 4, 2, 6, 4, 6, 4]; // phi(1)..phi(10)
        for (n, want) in (1u64..).zip(expected) {
            assert_eq!(totient(n, factors_of(n)), want, "phi({n})");
        }
    }

    #[test]
    fn distinct_prime_factor_counts() {
        assert_eq!(num_distinct_prime_factors(factors_of(1)), 0);
        assert_eq!(num_distinct_prime_factors(factors_of(644)), 3); // 2^2 * 7 * 23
        assert_eq!(num_distinct_prime_factors(factors_of(1024)), 1);
    }
}
