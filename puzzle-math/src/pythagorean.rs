//! Primitive Pythagorean triple generators
//!
//! Euclid-style parameterization restricted to odd m > n > 0 coprime:
//! a = (m^2 - n^2)/2, b = m*n, c = (m^2 + n^2)/2. Every primitive triple
//! shows up exactly once per leg ordering; callers wanting non-primitive
//! triples multiply through by integer scale factors themselves.

use num_integer::gcd;

fn parameterize(m: u64, n: u64) -> (u64, u64, u64) {
    ((m * m - n * n) / 2, m * n, (m * m + n * n) / 2)
}

/// All primitive triples with perimeter at most `limit`.
///
/// The perimeter is (m^2 - n^2)/2 + m*n + (m^2 + n^2)/2 = m*(m + n), which
/// exceeds m^2, bounding the outer parameter.
///
/// # Examples
///
/// ```
/// use puzzle_math::primitive_triples_by_perimeter;
///
/// let triples: Vec<_> = primitive_triples_by_perimeter(30).collect();
/// assert_eq!(triples, [(4, 3, 5), (12, 5, 13)]);
/// ```
pub fn primitive_triples_by_perimeter(limit: u64) -> impl Iterator<Item = (u64, u64, u64)> {
    (1..)
        .step_by(2)
        .take_while(move |&m| m * m < limit)
        .flat_map(move |m| {
            (1..m)
                .step_by(2)
                .take_while(move |&n| m * (m + n) <= limit)
                .filter(move |&n| gcd(m, n) == 1)
                .map(move |n| parameterize(m, n))
        })
}

/// All primitive triples with a leg below `limit`, in both leg orders.
///
/// Each primitive triple (a, b, c) is produced as (a, b, c) when a < limit
/// and as (b, a, c) when b < limit, so with `limit = 10` both (3, 4, 5) and
/// (4, 3, 5) appear but (8, 15, 17) arrives only leg-8-first.
pub fn primitive_triples_by_leg(limit: u64) -> impl Iterator<Item = (u64, u64, u64)> {
    (1..limit).step_by(2).flat_map(move |m| {
        // Odd leg a grows as n shrinks, so walk n downward for the cutoff.
        let odd_leg_first = (0..m / 2)
            .map(move |i| m - 2 - 2 * i)
            .filter(move |&n| gcd(m, n) == 1)
            .map(move |n| parameterize(m, n))
            .take_while(move |&(a, _, _)| a < limit);

        let even_leg_first = (1..m)
            .step_by(2)
            .filter(move |&n| gcd(m, n) == 1)
            .map(move |n| parameterize(m, n))
            .take_while(move |&(_, b, _)| b < limit)
            .map(|(a, b, c)| (b, a, c));

        odd_leg_first.chain(even_leg_first)
    })
}
