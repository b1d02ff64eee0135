//! Incremental prime cache: sieving, primality testing, and factoring
//!
//! [`PrimeCache`] is the single source of truth for primality queries. It
//! grows monotonically over its lifetime, either in bulk (an Eratosthenes
//! sieve up to a limit) or one odd candidate at a time (trial division
//! against the primes already known). Every cache is an independent, owned
//! value: construct one per benchmark run, puzzle, or test case and pass it
//! explicitly to whatever needs it. There is no process-wide prime state.
//!
//! The prime and factor streams borrow the cache mutably, because pulling on
//! them may extend it. That makes interleaving two streams over the same
//! cache a compile error rather than a runtime hazard; take a fresh stream
//! (restarting from 2 is cheap, everything already found is cached) instead
//! of trying to share one.

use crate::error::DomainError;
use crate::factor::Factor;

/// Squares overflow u64 for primes above 2^32, so compare in u128.
fn sq(p: u64) -> u128 {
    u128::from(p) * u128::from(p)
}

/// Incremental cache of prime numbers.
///
/// Invariants:
/// - `primes` is strictly increasing and contains no composite;
/// - every prime below `next_to_check` is present in `primes`;
/// - `next_to_check` is odd and only ever grows (except via [`clear`]).
///
/// [`clear`]: PrimeCache::clear
///
/// # Examples
///
/// ```
/// use puzzle_math::PrimeCache;
///
/// let mut cache = PrimeCache::new();
/// let first: Vec<u64> = cache.iter_primes().take(5).collect();
/// assert_eq!(first, [2, 3, 5, 7, 11]);
/// assert!(cache.is_prime(104_729));
/// ```
#[derive(Debug, Clone)]
pub struct PrimeCache {
    primes: Vec<u64>,
    next_to_check: u64,
}

impl PrimeCache {
    /// Create a cache knowing only that 2 is prime.
    pub fn new() -> Self {
        Self { primes: vec![2], next_to_check: 3 }
    }

    /// Reset to the initial state, forgetting everything found so far.
    ///
    /// Used between timed runs so one run cannot inherit primes sieved by an
    /// earlier one.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// All primes discovered so far, in increasing order.
    pub fn known_primes(&self) -> &[u64] {
        &self.primes
    }

    /// Bulk-sieve all primes below `limit`.
    ///
    /// A no-op if the cache already covers the range. Otherwise the sieve
    /// runs from scratch and its output replaces the cached list wholesale,
    /// including any primes previously found by incremental trial division;
    /// that is safe because the sieve output is the complete prime list below
    /// `limit` and `next_to_check` never decreases here.
    pub fn init_sieve_of_eratosthenes(&mut self, limit: u64) {
        if limit <= self.next_to_check {
            return;
        }

        let limit = usize::try_from(limit).expect("sieve limit exceeds addressable memory");
        let mut sieve = vec![true; limit];
        sieve[0] = false;
        sieve[1] = false;
        for p in 2..limit {
            if !sieve[p] {
                continue;
            }
            if p * p >= limit {
                break;
            }
            for multiple in (p * p..limit).step_by(p) {
                sieve[multiple] = false;
            }
        }

        self.primes = sieve
            .iter()
            .enumerate()
            .filter_map(|(n, &is_prime)| is_prime.then_some(n as u64))
            .collect();
        // The incremental path only tests odd candidates, so the boundary
        // must land on an odd number.
        self.next_to_check = limit as u64 | 1;
    }

    /// Lazy, unbounded stream of primes in increasing order.
    ///
    /// Yields everything cached first, then extends the cache on demand.
    /// Dropping the stream keeps whatever was found; a new stream restarts
    /// from 2.
    pub fn iter_primes(&mut self) -> PrimeIter<'_> {
        PrimeIter { cache: self, pos: 0, cutoff: None }
    }

    /// Stream of all primes strictly below `cutoff`.
    ///
    /// Sieves the full range up front, which is much faster than reaching
    /// `cutoff` by trial division.
    pub fn iter_primes_to(&mut self, cutoff: u64) -> PrimeIter<'_> {
        self.init_sieve_of_eratosthenes(cutoff);
        PrimeIter { cache: self, pos: 0, cutoff: Some(cutoff) }
    }

    /// Finite stream of primes `<= start`, largest first.
    pub fn iter_primes_rev(&mut self, start: u64) -> impl Iterator<Item = u64> + '_ {
        self.init_sieve_of_eratosthenes(start + 1);
        let end = self.primes.partition_point(|&p| p <= start);
        self.primes[..end].iter().rev().copied()
    }

    /// Test whether `n` is prime, extending the cache if needed.
    pub fn is_prime(&mut self, n: u64) -> bool {
        if n < self.next_to_check {
            return self.primes.binary_search(&n).is_ok();
        }

        for p in self.iter_primes() {
            if sq(p) > u128::from(n) {
                return true;
            }
            if n % p == 0 {
                return false;
            }
        }
        unreachable!("prime stream is infinite");
    }

    /// Factor `n` into an increasing stream of prime/multiplicity pairs.
    ///
    /// Lazy: primes are only generated up to the square root of what remains,
    /// and a remainder above the square root is itself prime and comes out
    /// last with multiplicity 1. `factor(1)` is the empty stream.
    ///
    /// # Errors
    ///
    /// [`DomainError::FactorOfZero`] if `n == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzle_math::{Factor, PrimeCache};
    ///
    /// let mut cache = PrimeCache::new();
    /// let factors: Vec<Factor> = cache.factor(600_851_475_143).unwrap().collect();
    /// assert_eq!(factors.last().unwrap().prime, 6857);
    /// ```
    pub fn factor(&mut self, n: u64) -> Result<FactorIter<'_>, DomainError> {
        if n == 0 {
            return Err(DomainError::FactorOfZero);
        }
        Ok(FactorIter { primes: self.iter_primes(), remaining: n, past_sqrt: false })
    }

    /// Append the next prime above the cached range and return it.
    fn extend(&mut self) -> u64 {
        loop {
            let n = self.next_to_check;
            self.next_to_check += 2;
            if self.test_against_known_primes(n) {
                self.primes.push(n);
                return n;
            }
        }
    }

    fn test_against_known_primes(&self, n: u64) -> bool {
        let last = *self.primes.last().expect("cache always holds at least 2");
        // Trial division only proves primality if the known primes reach
        // sqrt(n); candidates arrive in order, so this cannot fail.
        assert!(u128::from(n) < sq(last), "candidate {n} beyond proof range");

        for &p in &self.primes {
            if n % p == 0 {
                return false;
            }
            if sq(p) > u128::from(n) {
                break;
            }
        }
        true
    }
}

impl Default for PrimeCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Stream of primes out of a [`PrimeCache`], created by
/// [`PrimeCache::iter_primes`] or [`PrimeCache::iter_primes_to`].
pub struct PrimeIter<'a> {
    cache: &'a mut PrimeCache,
    pos: usize,
    cutoff: Option<u64>,
}

impl Iterator for PrimeIter<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let p = if self.pos < self.cache.primes.len() {
            self.cache.primes[self.pos]
        } else {
            self.cache.extend()
        };
        if self.cutoff.is_some_and(|cutoff| p >= cutoff) {
            return None;
        }
        self.pos += 1;
        Some(p)
    }
}

/// Lazy factorization stream, created by [`PrimeCache::factor`].
pub struct FactorIter<'a> {
    primes: PrimeIter<'a>,
    remaining: u64,
    past_sqrt: bool,
}

impl Iterator for FactorIter<'_> {
    type Item = Factor;

    fn next(&mut self) -> Option<Factor> {
        while !self.past_sqrt {
            let p = self.primes.next().expect("prime stream is infinite");

            let mut multiplicity = 0;
            while self.remaining % p == 0 {
                multiplicity += 1;
                self.remaining /= p;
            }

            if sq(p) > u128::from(self.remaining) {
                self.past_sqrt = true;
            }
            if multiplicity > 0 {
                return Some(Factor { prime: p, multiplicity });
            }
        }

        // Anything that survived trial division past its square root is a
        // prime in its own right.
        if self.remaining > 1 {
            let prime = self.remaining;
            self.remaining = 1;
            return Some(Factor { prime, multiplicity: 1 });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST_PRIMES: [u64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

    #[test]
    fn iter_primes_from_fresh_cache() {
        let mut cache = PrimeCache::new();
        let got: Vec<u64> = cache.iter_primes().take(FIRST_PRIMES.len()).collect();
        assert_eq!(got, FIRST_PRIMES);
    }

    #[test]
    fn iter_primes_to_stops_before_cutoff() {
        let mut cache = PrimeCache::new();
        let got: Vec<u64> = cache.iter_primes_to(30).collect();
        assert_eq!(got, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);

        // The cutoff itself is excluded even when prime
        let got: Vec<u64> = cache.iter_primes_to(29).collect();
        assert_eq!(got, [2, 3, 5, 7, 11, 13, 17, 19, 23]);
    }

    #[test]
    fn iter_primes_rev_runs_downward_from_start() {
        let mut cache = PrimeCache::new();
        let got: Vec<u64> = cache.iter_primes_rev(30).collect();
        assert_eq!(got, [29, 23, 19, 17, 13, 11, 7, 5, 3, 2]);

        // Inclusive at a prime start
        let got: Vec<u64> = cache.iter_primes_rev(29).take(2).collect();
        assert_eq!(got, [29, 23]);
    }

    #[test]
    fn is_prime_agrees_with_known_values() {
        let mut cache = PrimeCache::new();
        for n in 0..=50 {
            assert_eq!(cache.is_prime(n), FIRST_PRIMES.contains(&n), "n = {n}");
        }
        assert!(cache.is_prime(104_729)); // the 10000th prime
        assert!(!cache.is_prime(104_730));
        assert!(!cache.is_prime(3_215_031_751)); // strong pseudoprime to several bases
    }

    #[test]
    fn is_prime_uses_binary_search_below_boundary() {
        let mut cache = PrimeCache::new();
        cache.init_sieve_of_eratosthenes(1000);
        assert!(cache.is_prime(997));
        assert!(!cache.is_prime(999));
        assert!(!cache.is_prime(0));
        assert!(!cache.is_prime(1));
    }

    #[test]
    fn sieve_is_idempotent_for_equal_or_smaller_limits() {
        let mut cache = PrimeCache::new();
        cache.init_sieve_of_eratosthenes(500);
        let primes = cache.primes.clone();
        let boundary = cache.next_to_check;

        cache.init_sieve_of_eratosthenes(500);
        assert_eq!(cache.primes, primes);
        assert_eq!(cache.next_to_check, boundary);

        cache.init_sieve_of_eratosthenes(100);
        assert_eq!(cache.primes, primes);
        assert_eq!(cache.next_to_check, boundary);
    }

    #[test]
    fn sieve_boundary_is_always_odd() {
        let mut cache = PrimeCache::new();
        cache.init_sieve_of_eratosthenes(100);
        assert_eq!(cache.next_to_check, 101);
        cache.init_sieve_of_eratosthenes(103);
        assert_eq!(cache.next_to_check, 103);
    }

    #[test]
    fn sieve_dominates_incremental_extension() {
        // Regression for the sieve-after-trial-division transition: the sieve
        // must wholly replace the incrementally grown list, leaving no
        // duplicates, no gaps, and a consistent boundary.
        let mut incremental = PrimeCache::new();
        let _: Vec<u64> = incremental.iter_primes().take(30).collect();
        incremental.init_sieve_of_eratosthenes(1000);

        let mut sieved = PrimeCache::new();
        sieved.init_sieve_of_eratosthenes(1000);

        assert_eq!(incremental.primes, sieved.primes);
        assert_eq!(incremental.next_to_check, sieved.next_to_check);
        assert!(incremental.primes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sieve_after_larger_incremental_extension_is_a_noop() {
        let mut cache = PrimeCache::new();
        let reached: Vec<u64> = cache.iter_primes().take(200).collect();
        let boundary = cache.next_to_check;

        // Boundary has moved past this limit, so nothing should change.
        cache.init_sieve_of_eratosthenes(100);
        assert_eq!(cache.next_to_check, boundary);
        assert_eq!(cache.known_primes(), reached);
    }

    #[test]
    fn factor_small_numbers() {
        let mut cache = PrimeCache::new();
        let factors: Vec<Factor> = cache.factor(12).unwrap().collect();
        assert_eq!(
            factors,
            [
                Factor { prime: 2, multiplicity: 2 },
                Factor { prime: 3, multiplicity: 1 },
            ]
        );

        let factors: Vec<Factor> = cache.factor(1).unwrap().collect();
        assert!(factors.is_empty());

        let factors: Vec<Factor> = cache.factor(97).unwrap().collect();
        assert_eq!(factors, [Factor { prime: 97, multiplicity: 1 }]);
    }

    #[test]
    fn factor_yields_increasing_primes() {
        let mut cache = PrimeCache::new();
        let factors: Vec<Factor> = cache.factor(720).unwrap().collect();
        assert!(factors.windows(2).all(|w| w[0].prime < w[1].prime));
        let product: u64 = factors.iter().map(Factor::value).product();
        assert_eq!(product, 720);
    }

    #[test]
    fn factor_zero_is_a_domain_error() {
        let mut cache = PrimeCache::new();
        assert_eq!(cache.factor(0).err(), Some(DomainError::FactorOfZero));
    }

    #[test]
    fn clear_resets_to_initial_state() {
        let mut cache = PrimeCache::new();
        cache.init_sieve_of_eratosthenes(10_000);
        cache.clear();
        assert_eq!(cache.known_primes(), [2]);
        assert_eq!(cache.next_to_check, 3);
    }

    #[test]
    fn independent_caches_do_not_interfere() {
        let mut a = PrimeCache::new();
        let mut b = PrimeCache::new();
        a.init_sieve_of_eratosthenes(10_000);
        assert_eq!(b.known_primes(), [2]);
        assert!(b.is_prime(9973));
    }
}
