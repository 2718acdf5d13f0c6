//! Binary search over sorted slices that isolates a whole run of equal
//! elements rather than an arbitrary member of it.
//!
//! `comparison(element, value)` must be consistent with the order of the
//! slice: every element comparing `Less` precedes every element comparing
//! `Equal`, which precede every element comparing `Greater`. It does not
//! have to be a total order on its own; a prefix test that reports `Equal`
//! for every word starting with the query is a valid comparison here.
use super::error::{AutocompleteError, Result};
use std::cmp::Ordering;

fn check_range(len: usize, from: usize, length: usize) -> Result<()> {
    match from.checked_add(length) {
        Some(end) if end <= len => Ok(()),
        _ => Err(AutocompleteError::RangeViolation { from, length, len }),
    }
}

/// Lowest index in `sorted` whose element compares `Equal` to `value`.
pub fn find_first<T, Q: ?Sized, F>(sorted: &[T], value: &Q, comparison: F) -> Option<usize>
where
    F: Fn(&T, &Q) -> Ordering,
{
    search_first(sorted, 0, sorted.len(), value, &comparison)
}

/// Lowest matching index inside `sorted[from..from + length]`.
pub fn find_first_in<T, Q: ?Sized, F>(
    sorted: &[T],
    from: usize,
    length: usize,
    value: &Q,
    comparison: F,
) -> Result<Option<usize>>
where
    F: Fn(&T, &Q) -> Ordering,
{
    check_range(sorted.len(), from, length)?;
    Ok(search_first(sorted, from, length, value, &comparison))
}

/// Highest index in `sorted` whose element compares `Equal` to `value`.
pub fn find_last<T, Q: ?Sized, F>(sorted: &[T], value: &Q, comparison: F) -> Option<usize>
where
    F: Fn(&T, &Q) -> Ordering,
{
    search_last(sorted, 0, sorted.len(), value, &comparison)
}

/// Highest matching index inside `sorted[from..from + length]`.
pub fn find_last_in<T, Q: ?Sized, F>(
    sorted: &[T],
    from: usize,
    length: usize,
    value: &Q,
    comparison: F,
) -> Result<Option<usize>>
where
    F: Fn(&T, &Q) -> Ordering,
{
    check_range(sorted.len(), from, length)?;
    Ok(search_last(sorted, from, length, value, &comparison))
}

/// The contiguous run of elements comparing `Equal` to `value`.
///
/// Both ends are located with their own logarithmic search, so the cost is
/// O(log n) regardless of how long the run is.
pub fn find_all<'a, T, Q: ?Sized, F>(sorted: &'a [T], value: &Q, comparison: F) -> &'a [T]
where
    F: Fn(&T, &Q) -> Ordering,
{
    let first = match search_first(sorted, 0, sorted.len(), value, &comparison) {
        Some(first) => first,
        None => return &sorted[..0],
    };
    // the run is non-empty, so the last match is at least `first`
    let last = search_last(sorted, first, sorted.len() - first, value, &comparison).unwrap_or(first);
    &sorted[first..=last]
}

fn search_first<T, Q: ?Sized, F>(
    sorted: &[T],
    from: usize,
    length: usize,
    value: &Q,
    comparison: &F,
) -> Option<usize>
where
    F: Fn(&T, &Q) -> Ordering,
{
    // half-open [low, high)
    let mut low = from;
    let mut high = from + length;
    while low < high {
        let mid = low + (high - low) / 2;
        match comparison(&sorted[mid], value) {
            Ordering::Equal => {
                if mid == from || comparison(&sorted[mid - 1], value) != Ordering::Equal {
                    return Some(mid);
                }
                high = mid;
            }
            Ordering::Greater => high = mid,
            Ordering::Less => low = mid + 1,
        }
    }
    None
}

fn search_last<T, Q: ?Sized, F>(
    sorted: &[T],
    from: usize,
    length: usize,
    value: &Q,
    comparison: &F,
) -> Option<usize>
where
    F: Fn(&T, &Q) -> Ordering,
{
    let end = from + length;
    let mut low = from;
    let mut high = end;
    while low < high {
        let mid = low + (high - low) / 2;
        match comparison(&sorted[mid], value) {
            Ordering::Equal => {
                if mid + 1 == end || comparison(&sorted[mid + 1], value) != Ordering::Equal {
                    return Some(mid);
                }
                low = mid + 1;
            }
            Ordering::Greater => high = mid,
            Ordering::Less => low = mid + 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn by_value(a: &u32, b: &u32) -> Ordering {
        a.cmp(b)
    }

    fn starts_with(word: &&str, prefix: &str) -> Ordering {
        if word.starts_with(prefix) {
            Ordering::Equal
        } else {
            (*word).cmp(prefix)
        }
    }

    #[test]
    fn find_first_and_last_bound_a_duplicate_run() {
        let sorted = [1, 2, 2, 2, 3, 5, 5, 8];
        assert_eq!(find_first(&sorted, &2, by_value), Some(1));
        assert_eq!(find_last(&sorted, &2, by_value), Some(3));
        assert_eq!(find_first(&sorted, &5, by_value), Some(5));
        assert_eq!(find_last(&sorted, &5, by_value), Some(6));
        assert_eq!(find_first(&sorted, &8, by_value), Some(7));
        assert_eq!(find_last(&sorted, &1, by_value), Some(0));
    }

    #[test]
    fn missing_value_returns_none() {
        let sorted = [1, 3, 5, 7];
        for missing in [0, 2, 4, 6, 8] {
            assert_eq!(find_first(&sorted, &missing, by_value), None);
            assert_eq!(find_last(&sorted, &missing, by_value), None);
            assert!(find_all(&sorted, &missing, by_value).is_empty());
        }
    }

    #[test]
    fn empty_slice_returns_none() {
        let sorted: [u32; 0] = [];
        assert_eq!(find_first(&sorted, &1, by_value), None);
        assert_eq!(find_last(&sorted, &1, by_value), None);
        assert_eq!(find_first_in(&sorted, 0, 0, &1, by_value).unwrap(), None);
        assert!(find_all(&sorted, &1, by_value).is_empty());
    }

    #[test]
    fn every_element_matching_spans_whole_slice() {
        let sorted = [4; 9];
        assert_eq!(find_first(&sorted, &4, by_value), Some(0));
        assert_eq!(find_last(&sorted, &4, by_value), Some(8));
        assert_eq!(find_all(&sorted, &4, by_value).len(), 9);
    }

    #[test]
    fn subrange_search_stays_inside_bounds() {
        let sorted = [2, 2, 2, 2, 2, 2];
        assert_eq!(find_first_in(&sorted, 2, 3, &2, by_value).unwrap(), Some(2));
        assert_eq!(find_last_in(&sorted, 2, 3, &2, by_value).unwrap(), Some(4));
        assert_eq!(find_first_in(&sorted, 6, 0, &2, by_value).unwrap(), None);
    }

    #[test]
    fn subrange_past_the_end_is_a_range_violation() {
        let sorted = [1, 2, 3, 4];
        for (from, length) in [(0, 5), (2, 3), (5, 0), (1, usize::MAX)] {
            let err = find_first_in(&sorted, from, length, &1, by_value).unwrap_err();
            assert!(matches!(err, AutocompleteError::RangeViolation { .. }));
            let err = find_last_in(&sorted, from, length, &1, by_value).unwrap_err();
            assert!(matches!(err, AutocompleteError::RangeViolation { .. }));
        }
    }

    #[test]
    fn prefix_comparison_finds_contiguous_block() {
        let sorted = ["kanojo", "kare", "karetachi", "korosu", "sakura"];
        assert_eq!(find_all(&sorted, "ka", starts_with), &["kanojo", "kare", "karetachi"]);
        assert_eq!(find_all(&sorted, "kar", starts_with), &["kare", "karetachi"]);
        assert!(find_all(&sorted, "xyz", starts_with).is_empty());
    }

    #[test]
    fn prefix_that_is_itself_an_entry_includes_its_extensions() {
        let sorted = ["kar", "kara", "kare", "karetachi", "kart", "kas"];
        assert_eq!(find_all(&sorted, "kare", starts_with), &["kare", "karetachi"]);
        assert_eq!(
            find_all(&sorted, "kar", starts_with),
            &["kar", "kara", "kare", "karetachi", "kart"]
        );
    }

    #[test]
    fn matches_linear_scan_on_random_input() {
        const SIZE: usize = 500;
        let mut rng = rand::rng();
        for _ in 0..50 {
            let mut sorted: Vec<u32> = (0..SIZE).map(|_| rng.random_range(0..40)).collect();
            sorted.sort();
            let value = rng.random_range(0..45);
            let first = sorted.iter().position(|&x| x == value);
            let last = sorted.iter().rposition(|&x| x == value);
            assert_eq!(find_first(&sorted, &value, by_value), first);
            assert_eq!(find_last(&sorted, &value, by_value), last);
            let count = sorted.iter().filter(|&&x| x == value).count();
            assert_eq!(find_all(&sorted, &value, by_value).len(), count);
        }
    }
}
