//! Core traits and types for statorder.
//!
//! This module defines:
//! - [`OrderKey`]: The trait a column implements to be ordered.
//! - [`OrderValue`]: Per-element NA detection and comparison for the built-in scalar kinds.
//! - [`Vector`]: The tagged variant over the five scalar kinds.
//! - NA sentinels for the integer and real kinds.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::collate::collate;
use crate::compare::compare_na;

/// Integer missing-value sentinel.
pub const NA_INTEGER: i32 = i32::MIN;

/// Low word of the real NA bit pattern.
const NA_REAL_LOW_WORD: u64 = 1954;

/// Real missing-value sentinel: a quiet NaN whose low word is 1954.
///
/// Every `NA_REAL` is a NaN, but not every NaN is `NA_REAL`. Use
/// [`is_na_real`] to tell them apart.
pub const NA_REAL: f64 = f64::from_bits(0x7FF0_0000_0000_0000 | NA_REAL_LOW_WORD);

/// Returns `true` if `x` carries the NA bit pattern (as opposed to a plain NaN).
#[inline]
pub fn is_na_real(x: f64) -> bool {
    x.is_nan() && (x.to_bits() & 0xFFFF_FFFF) == NA_REAL_LOW_WORD
}

/// A complex number.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const NA: Complex = Complex {
        re: NA_REAL,
        im: NA_REAL,
    };

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

/// A scalar element that knows whether it is missing and how it compares.
///
/// `cmp_value` is only called on two non-missing elements.
pub trait OrderValue {
    fn is_na(&self) -> bool;

    fn cmp_value(&self, other: &Self) -> Ordering;

    /// Three-way comparison with NA placement: a missing element compares
    /// greater than any present one when `na_last`, smaller otherwise.
    #[inline]
    fn compare_with(&self, other: &Self, na_last: bool) -> Ordering {
        compare_na(self.is_na(), other.is_na(), na_last).unwrap_or_else(|| self.cmp_value(other))
    }
}

impl OrderValue for i32 {
    #[inline]
    fn is_na(&self) -> bool {
        *self == NA_INTEGER
    }

    #[inline]
    fn cmp_value(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

// NA and NaN are both missing.
impl OrderValue for f64 {
    #[inline]
    fn is_na(&self) -> bool {
        self.is_nan()
    }

    #[inline]
    fn cmp_value(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

impl OrderValue for Option<bool> {
    #[inline]
    fn is_na(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn cmp_value(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl OrderValue for Option<String> {
    #[inline]
    fn is_na(&self) -> bool {
        self.is_none()
    }

    fn cmp_value(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(a), Some(b)) => collate(a, b),
            _ => Ordering::Equal,
        }
    }
}

impl OrderValue for Option<&str> {
    #[inline]
    fn is_na(&self) -> bool {
        self.is_none()
    }

    fn cmp_value(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(a), Some(b)) => collate(a, b),
            _ => Ordering::Equal,
        }
    }
}

impl OrderValue for Complex {
    /// A complex value is missing when either part is.
    #[inline]
    fn is_na(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Lexicographic on (real, imaginary).
    fn cmp_value(&self, other: &Self) -> Ordering {
        self.re
            .cmp_value(&other.re)
            .then_with(|| self.im.cmp_value(&other.im))
    }
}

/// A trait for accessing the rows of an ordering key without copying.
///
/// Implemented for slices, `Vec`s and `VecDeque`s of every [`OrderValue`]
/// and for [`Vector`]. Custom column storage (e.g. a dictionary-encoded
/// column) can implement it directly.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use statorder::core::OrderKey;
///
/// struct Scores(Vec<Option<u32>>);
///
/// impl OrderKey for Scores {
///     fn len(&self) -> usize {
///         self.0.len()
///     }
///
///     fn is_na(&self, index: usize) -> bool {
///         self.0[index].is_none()
///     }
///
///     fn cmp_values(&self, a: usize, b: usize) -> Ordering {
///         self.0[a].cmp(&self.0[b])
///     }
/// }
/// ```
pub trait OrderKey {
    /// Returns the number of rows.
    fn len(&self) -> usize;

    /// Returns `true` if the key has no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the row at `index` is missing (NA, or NaN for reals).
    fn is_na(&self, index: usize) -> bool;

    /// Compares two rows, both known to be non-missing.
    fn cmp_values(&self, a: usize, b: usize) -> Ordering;

    /// Completeness flag: `true` iff no row is missing.
    fn is_complete(&self) -> bool {
        (0..self.len()).all(|i| !self.is_na(i))
    }

    /// NA-aware three-way comparison of two rows.
    fn compare(&self, a: usize, b: usize, na_last: bool) -> Ordering {
        compare_na(self.is_na(a), self.is_na(b), na_last)
            .unwrap_or_else(|| self.cmp_values(a, b))
    }
}

impl<T: OrderValue> OrderKey for [T] {
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_na(&self, index: usize) -> bool {
        self[index].is_na()
    }

    #[inline]
    fn cmp_values(&self, a: usize, b: usize) -> Ordering {
        self[a].cmp_value(&self[b])
    }

    #[inline]
    fn compare(&self, a: usize, b: usize, na_last: bool) -> Ordering {
        self[a].compare_with(&self[b], na_last)
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_slice()).
impl<T: OrderValue> OrderKey for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_na(&self, index: usize) -> bool {
        self[index].is_na()
    }

    #[inline]
    fn cmp_values(&self, a: usize, b: usize) -> Ordering {
        self[a].cmp_value(&self[b])
    }

    #[inline]
    fn compare(&self, a: usize, b: usize, na_last: bool) -> Ordering {
        self[a].compare_with(&self[b], na_last)
    }
}

impl<T: OrderValue> OrderKey for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_na(&self, index: usize) -> bool {
        self[index].is_na()
    }

    #[inline]
    fn cmp_values(&self, a: usize, b: usize) -> Ordering {
        self[a].cmp_value(&self[b])
    }

    #[inline]
    fn compare(&self, a: usize, b: usize, na_last: bool) -> Ordering {
        self[a].compare_with(&self[b], na_last)
    }
}

/// Scalar kind of a [`Vector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VectorKind {
    Integer,
    Double,
    Logical,
    Character,
    Complex,
}

/// A homogeneous typed vector.
#[derive(Clone, Debug, PartialEq)]
pub enum Vector {
    Integer(Vec<i32>),
    Double(Vec<f64>),
    Logical(Vec<Option<bool>>),
    Character(Vec<Option<String>>),
    Complex(Vec<Complex>),
}

impl Vector {
    pub fn kind(&self) -> VectorKind {
        match self {
            Vector::Integer(_) => VectorKind::Integer,
            Vector::Double(_) => VectorKind::Double,
            Vector::Logical(_) => VectorKind::Logical,
            Vector::Character(_) => VectorKind::Character,
            Vector::Complex(_) => VectorKind::Complex,
        }
    }

    /// Builds a character vector, `None` standing for NA.
    pub fn character<S: Into<String>>(values: impl IntoIterator<Item = Option<S>>) -> Self {
        Vector::Character(values.into_iter().map(|v| v.map(Into::into)).collect())
    }
}

impl OrderKey for Vector {
    fn len(&self) -> usize {
        match self {
            Vector::Integer(v) => v.len(),
            Vector::Double(v) => v.len(),
            Vector::Logical(v) => v.len(),
            Vector::Character(v) => v.len(),
            Vector::Complex(v) => v.len(),
        }
    }

    fn is_na(&self, index: usize) -> bool {
        match self {
            Vector::Integer(v) => v[index].is_na(),
            Vector::Double(v) => v[index].is_na(),
            Vector::Logical(v) => v[index].is_na(),
            Vector::Character(v) => v[index].is_na(),
            Vector::Complex(v) => v[index].is_na(),
        }
    }

    fn cmp_values(&self, a: usize, b: usize) -> Ordering {
        match self {
            Vector::Integer(v) => v.cmp_values(a, b),
            Vector::Double(v) => v.cmp_values(a, b),
            Vector::Logical(v) => v.cmp_values(a, b),
            Vector::Character(v) => v.cmp_values(a, b),
            Vector::Complex(v) => v.cmp_values(a, b),
        }
    }

    fn compare(&self, a: usize, b: usize, na_last: bool) -> Ordering {
        match self {
            Vector::Integer(v) => v.compare(a, b, na_last),
            Vector::Double(v) => v.compare(a, b, na_last),
            Vector::Logical(v) => v.compare(a, b, na_last),
            Vector::Character(v) => v.compare(a, b, na_last),
            Vector::Complex(v) => v.compare(a, b, na_last),
        }
    }
}

impl From<Vec<i32>> for Vector {
    fn from(v: Vec<i32>) -> Self {
        Vector::Integer(v)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(v: Vec<f64>) -> Self {
        Vector::Double(v)
    }
}

impl From<Vec<Option<bool>>> for Vector {
    fn from(v: Vec<Option<bool>>) -> Self {
        Vector::Logical(v)
    }
}

impl From<Vec<Option<String>>> for Vector {
    fn from(v: Vec<Option<String>>) -> Self {
        Vector::Character(v)
    }
}

impl From<Vec<Complex>> for Vector {
    fn from(v: Vec<Complex>) -> Self {
        Vector::Complex(v)
    }
}
