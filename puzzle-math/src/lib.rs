//! Shared numeric algorithms for mathematical puzzle solvers
//!
//! A small library of the number-theoretic and graph machinery that shows up
//! again and again across numbered-puzzle solutions: primality and factoring
//! with an incremental cache, divisor arithmetic, shortest paths over
//! node-weighted grids, periodic continued fractions for Pell-style problems,
//! and assorted combinatorial sequences.
//!
//! # Overview
//!
//! This library provides:
//! - [`PrimeCache`]: an incremental prime sieve with on-demand trial-division
//!   extension, backing primality tests and lazy factorization
//! - [`Factor`] and pure divisor functions ([`num_divisors`], [`sum_divisors`],
//!   [`totient`]) over factor sequences
//! - [`dijkstra`] and [`node_costs_to_edge_costs`] for weighted shortest paths
//! - [`QuadraticCFrac`]: periodic continued fractions of square roots, with
//!   exact big-rational convergents via [`nth_convergent`]
//! - Pythagorean triple generators, partition counts, figurate sequences, and
//!   an interval pretty-printer
//!
//! The library performs no I/O and keeps no global state: every stateful
//! object (notably [`PrimeCache`]) is an owned value constructed per unit of
//! work and passed explicitly. Everything is single-threaded and pull-based;
//! the lazy streams extend their owning cache as they are consumed.
//!
//! # Quick example
//!
//! ```
//! use puzzle_math::{PrimeCache, num_divisors, sum_divisors};
//!
//! let mut cache = PrimeCache::new();
//!
//! // 10001st prime
//! let p = cache.iter_primes().nth(10_000).unwrap();
//! assert_eq!(p, 104_743);
//!
//! // Divisor arithmetic from a lazy factorization
//! assert_eq!(num_divisors(cache.factor(220).unwrap()), 12);
//! assert_eq!(sum_divisors(cache.factor(220).unwrap()) - 220, 284);
//! ```

mod cfrac;
mod error;
mod factor;
mod graph;
mod intervals;
mod primes;
mod pythagorean;
mod sequence;

// Re-export public API
pub use cfrac::{QuadraticCFrac, nth_convergent};
pub use error::{DomainError, GraphError, IntervalParseError};
pub use factor::{Factor, num_distinct_prime_factors, num_divisors, sum_divisors, totient};
pub use graph::{EdgeCosts, dijkstra, node_costs_to_edge_costs};
pub use intervals::{format_as_intervals, intervalize, parse_interval_string};
pub use primes::{FactorIter, PrimeCache, PrimeIter};
pub use pythagorean::{primitive_triples_by_leg, primitive_triples_by_perimeter};
pub use sequence::{
    IncreasingSeq, Partitions, binomial, fibonacci, from_digits, general_fibonacci, heptagonal,
    hexagonal, is_palindrome, num_digits, octagonal, pentagonal, square, sum_of_n_squares,
    to_digits, triangle, values_in_range,
};
