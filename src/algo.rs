//! Ordering algorithms.
//!
//! This module computes the permutation that puts one or more keys in order:
//! - **Single key**: missing rows are partitioned to the requested end first,
//!   then the remaining range is shell-sorted by plain value comparison.
//!   The key type is known statically, so no per-comparison dispatch happens.
//! - **Multiple keys**: one shell sort with a lexicographic row comparator;
//!   NA placement is resolved by the comparator column by column.
//!
//! Every order is stable: rows whose keys tie keep ascending index order,
//! in both directions.
//!
//! The main entry points are [`order`] and [`order_by`].

use std::cmp::Ordering;

use tracing::{debug_span, trace};

use crate::compare::compare_rows;
use crate::core::{OrderKey, Vector};
use crate::error::{Error, Result};
use crate::shell::{partition_na, shell_sort};

/// Direction and NA placement of an ordering call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderOptions {
    /// Missing rows go last when `true`, first when `false`.
    pub na_last: bool,
    /// Sort values in descending order. Ties still keep ascending index order.
    pub decreasing: bool,
}

impl Default for OrderOptions {
    fn default() -> Self {
        Self {
            na_last: true,
            decreasing: false,
        }
    }
}

impl OrderOptions {
    pub const fn new(na_last: bool, decreasing: bool) -> Self {
        Self {
            na_last,
            decreasing,
        }
    }

    /// Resolves logical control vectors: an empty vector or a leading
    /// `FALSE` turns a flag off, anything else (NA included) turns it on.
    ///
    /// # Examples
    ///
    /// ```
    /// use statorder::OrderOptions;
    ///
    /// let options = OrderOptions::from_logical(&[None], &[]);
    /// assert_eq!(options, OrderOptions::new(true, false));
    /// ```
    pub fn from_logical(na_last: &[Option<bool>], decreasing: &[Option<bool>]) -> Self {
        let flag = |v: &[Option<bool>]| !matches!(v.first(), None | Some(Some(false)));
        Self {
            na_last: flag(na_last),
            decreasing: flag(decreasing),
        }
    }
}

/// Computes the ordering permutation of `columns`.
///
/// The result holds 0-based row indices: `result[k]` is the row that goes
/// in sorted position `k`. Columns after the first break ties of the
/// previous ones. No columns yields an empty permutation.
///
/// # Errors
///
/// [`Error::ArgumentLengthMismatch`] if a column differs in length from the first.
///
/// # Examples
///
/// ```
/// use statorder::{order, OrderOptions, Vector};
///
/// let columns = vec![
///     Vector::Integer(vec![1, 1, 2]),
///     Vector::character([Some("b"), Some("a"), Some("a")]),
/// ];
/// let perm = order(&columns, OrderOptions::default()).unwrap();
/// assert_eq!(perm, vec![1, 0, 2]);
/// ```
pub fn order(columns: &[Vector], options: OrderOptions) -> Result<Vec<usize>> {
    match columns {
        [] => Ok(Vec::new()),
        [key] => Ok(order_vector(key, options)),
        _ => order_columns(columns, options),
    }
}

/// Single-key dispatch on the scalar kind.
fn order_vector(key: &Vector, options: OrderOptions) -> Vec<usize> {
    trace!(kind = ?key.kind(), "single-key order");
    match key {
        Vector::Integer(v) => order_by(v.as_slice(), options),
        Vector::Double(v) => order_by(v.as_slice(), options),
        Vector::Logical(v) => order_by(v.as_slice(), options),
        Vector::Character(v) => order_by(v.as_slice(), options),
        Vector::Complex(v) => order_by(v.as_slice(), options),
    }
}

/// Computes the ordering permutation of a single key.
///
/// # Examples
///
/// ```
/// use statorder::{order_by, OrderOptions};
/// use statorder::core::NA_INTEGER;
///
/// let v = vec![3, NA_INTEGER, 1, 3];
/// assert_eq!(order_by(&v, OrderOptions::default()), vec![2, 0, 3, 1]);
/// assert_eq!(order_by(&v, OrderOptions::new(false, true)), vec![1, 0, 3, 2]);
/// ```
pub fn order_by<K: OrderKey + ?Sized>(key: &K, options: OrderOptions) -> Vec<usize> {
    let OrderOptions {
        na_last,
        decreasing,
    } = options;
    let len = key.len();
    let _span = debug_span!("order_by", len, na_last, decreasing).entered();

    let mut index: Vec<usize> = (0..len).collect();
    if len < 2 {
        return index;
    }

    let mut lo = 0;
    let mut hi = len;
    if !key.is_complete() {
        let is_na: Vec<bool> = (0..len).map(|i| key.is_na(i)).collect();
        let num_na = partition_na(&mut index, &is_na, na_last);
        trace!(num_na, "partitioned missing rows");
        if na_last {
            hi -= num_na;
        } else {
            lo += num_na;
        }
    }

    shell_sort(&mut index[lo..hi], |a, b| {
        let c = key.cmp_values(a, b);
        let c = if decreasing { c.reverse() } else { c };
        c == Ordering::Greater || (c == Ordering::Equal && a > b)
    });
    index
}

/// Computes the ordering permutation of several keys of any [`OrderKey`] type.
///
/// Always takes the lexicographic path, even for a single column.
///
/// # Errors
///
/// [`Error::ArgumentLengthMismatch`] if a column differs in length from the first.
pub fn order_columns<K: OrderKey>(columns: &[K], options: OrderOptions) -> Result<Vec<usize>> {
    let Some(first) = columns.first() else {
        return Ok(Vec::new());
    };
    let len = first.len();
    for (column, key) in columns.iter().enumerate().skip(1) {
        if key.len() != len {
            return Err(Error::ArgumentLengthMismatch {
                column,
                expected: len,
                found: key.len(),
            });
        }
    }

    let OrderOptions {
        na_last,
        decreasing,
    } = options;
    let _span = debug_span!("order_columns", columns = columns.len(), len, na_last, decreasing)
        .entered();

    let mut index: Vec<usize> = (0..len).collect();
    shell_sort(&mut index, |a, b| {
        match compare_rows(columns, a, b, na_last, decreasing) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => a > b,
        }
    });
    Ok(index)
}

/// Converts a 0-based permutation to 1-based positions for display.
pub fn one_based(perm: &[usize]) -> Vec<usize> {
    perm.iter().map(|&i| i + 1).collect()
}
