//! Linear and binary search over slices.
//!
//! All searches report "not found" as `None`; a `Some(i)` always satisfies
//! `haystack[i] == *needle`. The binary variants require the slice to be
//! sorted ascending; this is a caller contract, not checked at runtime.

use core::cmp::Ordering;

/// Scans every position in order and returns the first index whose element
/// equals `needle`.
///
/// No ordering precondition on the input. O(n) worst and average case.
///
/// # Examples
/// ```
/// use range_search::search;
///
/// let values = [3, 1, 4, 1, 5];
/// assert_eq!(search::linear(&1, &values), Some(1)); // first match wins
/// assert_eq!(search::linear(&9, &values), None);
/// ```
pub fn linear<T: PartialEq>(needle: &T, haystack: &[T]) -> Option<usize> {
    for (index, item) in haystack.iter().enumerate() {
        if item == needle {
            return Some(index);
        }
    }
    None
}

/// Iterative binary search over a slice sorted ascending.
///
/// Maintains a half-open candidate window, halves it at the floor midpoint
/// on each pass, and returns as soon as the midpoint element matches.
/// O(log n) time, O(1) extra space.
///
/// The returned index is *some* position of an element equal to `needle`,
/// not necessarily the first when duplicates are present.
///
/// # Examples
/// ```
/// use range_search::search;
///
/// let values = [1, 3, 5, 7, 9];
/// assert_eq!(search::binary(&7, &values), Some(3));
/// assert_eq!(search::binary(&4, &values), None);
/// ```
pub fn binary<T: Ord>(needle: &T, haystack: &[T]) -> Option<usize> {
    let mut low = 0;
    let mut high = haystack.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match haystack[mid].cmp(needle) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}

/// Divide-and-conquer binary search over a slice sorted ascending.
///
/// Splits at `len / 2`: if `needle` is strictly greater than the element
/// just before the midpoint, recurses into the upper half and shifts a
/// found sub-index by the midpoint offset on the way out; otherwise
/// recurses into the lower half. The base case compares the sole remaining
/// element.
///
/// Each level borrows a subslice of the same backing storage, so the whole
/// call tree costs O(1) space per level with O(log n) depth.
///
/// # Examples
/// ```
/// use range_search::search;
///
/// let letters: Vec<char> = ('b'..='x').collect();
/// assert_eq!(search::binary_recursive(&'e', &letters), Some(3));
/// assert_eq!(search::binary_recursive(&'z', &letters), None);
/// ```
pub fn binary_recursive<T: Ord>(needle: &T, haystack: &[T]) -> Option<usize> {
    if haystack.len() > 1 {
        let mid = haystack.len() / 2;
        let (half, offset) = if *needle > haystack[mid - 1] {
            (&haystack[mid..], mid)
        } else {
            (&haystack[..mid], 0)
        };
        binary_recursive(needle, half).map(|index| index + offset)
    } else if haystack.first() == Some(needle) {
        Some(0)
    } else {
        None
    }
}
