//! Grouping integer sets into contiguous intervals for compact display

use itertools::Itertools;

use crate::error::IntervalParseError;

/// Group a set of integers into maximal contiguous closed intervals.
///
/// Both endpoints are inclusive; an isolated integer comes out as `(a, a)`.
/// Input order does not matter and duplicates are ignored.
///
/// # Examples
///
/// ```
/// use puzzle_math::intervalize;
///
/// assert_eq!(intervalize([1, 2, 3, 7, 8, 10]), [(1, 3), (7, 8), (10, 10)]);
/// ```
pub fn intervalize(numbers: impl IntoIterator<Item = u64>) -> Vec<(u64, u64)> {
    let mut sorted = numbers.into_iter().sorted().dedup();
    let Some(first) = sorted.next() else {
        return Vec::new();
    };

    let mut intervals = Vec::new();
    let (mut start, mut prev) = (first, first);
    for n in sorted {
        if n != prev + 1 {
            intervals.push((start, prev));
            start = n;
        }
        prev = n;
    }
    intervals.push((start, prev));
    intervals
}

/// Pretty-print a set of integers as comma-separated intervals.
///
/// `infinite_tail = Some(n)` marks every integer at least `n` as present; the
/// tail swallows any interval it overlaps or touches (so `5-10` merges with a
/// tail starting at 11) and renders as `"n-inf"`.
///
/// # Examples
///
/// ```
/// use puzzle_math::format_as_intervals;
///
/// let s = format_as_intervals([1, 2, 3, 7, 8, 10], Some(11));
/// assert_eq!(s, "1-3, 7-8, 10-inf");
/// ```
pub fn format_as_intervals(
    numbers: impl IntoIterator<Item = u64>,
    infinite_tail: Option<u64>,
) -> String {
    let mut intervals = intervalize(numbers);

    let mut tail = infinite_tail;
    while let (Some(t), Some(&(start, end))) = (tail, intervals.last()) {
        // end + 1 so a tail adjacent to the last interval merges into it
        if t > end + 1 {
            break;
        }
        tail = Some(t.min(start));
        intervals.pop();
    }

    let pieces = intervals
        .into_iter()
        .map(|(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{start}-{end}")
            }
        })
        .chain(tail.map(|t| format!("{t}-inf")));
    pieces.format(", ").to_string()
}

/// Parse a single interval back out of the rendered form: either a lone
/// integer `"7"` or a closed range `"3-9"`.
pub fn parse_interval_string(s: &str) -> Result<(u64, u64), IntervalParseError> {
    if let Ok(n) = s.parse::<u64>() {
        return Ok((n, n));
    }

    let (start, end) = s
        .split_once('-')
        .ok_or_else(|| IntervalParseError::InvalidFormat(s.to_string()))?;
    Ok((start.parse()?, end.parse()?))
}
