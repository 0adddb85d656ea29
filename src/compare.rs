//! NA-aware comparators.
//!
//! Per-kind element comparison lives on [`OrderValue`](crate::core::OrderValue);
//! this module holds the NA placement rule shared by every kind and the
//! row-level comparators the ordering algorithms are built from.

use std::cmp::Ordering;

use crate::core::OrderKey;

/// Resolves a comparison in which at least one side is missing.
///
/// Returns `None` when neither side is missing, leaving the decision to
/// the value comparison. Two missing values are equal; a single missing
/// value sorts after the other when `na_last`, before it otherwise.
#[inline(always)]
pub fn compare_na(a_is_na: bool, b_is_na: bool, na_last: bool) -> Option<Ordering> {
    match (a_is_na, b_is_na) {
        (false, false) => None,
        (true, true) => Some(Ordering::Equal),
        (true, false) => Some(if na_last {
            Ordering::Greater
        } else {
            Ordering::Less
        }),
        (false, true) => Some(if na_last {
            Ordering::Less
        } else {
            Ordering::Greater
        }),
    }
}

/// Compares rows `i` and `j` of a single key.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use statorder::compare::compare;
/// use statorder::core::NA_INTEGER;
///
/// let v = vec![3, NA_INTEGER, 1];
/// assert_eq!(compare(&v, 0, 2, true), Ordering::Greater);
/// assert_eq!(compare(&v, 1, 2, true), Ordering::Greater);
/// assert_eq!(compare(&v, 1, 2, false), Ordering::Less);
/// ```
#[inline]
pub fn compare<K: OrderKey + ?Sized>(key: &K, i: usize, j: usize, na_last: bool) -> Ordering {
    key.compare(i, j, na_last)
}

/// Lexicographic comparison of rows `i` and `j` across `columns`.
///
/// The first column that does not tie decides; its result is reversed when
/// `decreasing`. NA placement follows `na_last` whatever the direction.
/// Returns `Equal` only when every column ties; callers break that tie by
/// index.
pub fn compare_rows<K: OrderKey>(
    columns: &[K],
    i: usize,
    j: usize,
    na_last: bool,
    decreasing: bool,
) -> Ordering {
    // Pre-flipped: the reversal below flips it back.
    let na_last = na_last ^ decreasing;
    for column in columns {
        let c = column.compare(i, j, na_last);
        if c != Ordering::Equal {
            return if decreasing { c.reverse() } else { c };
        }
    }
    Ordering::Equal
}
