//! Vectorized random variate generation.
//!
//! [`evaluate_vector`] applies a per-element formula across recycled
//! parameter vectors, holding the generator for the whole loop and
//! reporting missing results once per call.
//!
//! # Recycling
//!
//! Element `i` of the result is computed from element `i % len` of every
//! parameter vector, so shorter vectors repeat.
//!
//! # Missing results
//!
//! A zero-length parameter vector short-circuits to an all-missing result
//! without calling the formula. Otherwise any missing element produced by
//! the formula marks the result incomplete. Both cases carry one
//! [`RandWarning`].

use tracing::{debug_span, warn};

use crate::core::{NA_INTEGER, NA_REAL, OrderKey, OrderValue, Vector};
use crate::error::{Error, RandWarning, Result};
use crate::rng::{RandomNumberProvider, RngContext};

/// Scalar kind a vectorized formula can produce.
pub trait RandValue: Copy {
    /// Missing sentinel filling short-circuited results.
    const MISSING: Self;

    /// Warning raised when missing values are produced.
    const WARNING: RandWarning;

    fn is_missing(&self) -> bool;

    /// Wraps generated values as a typed vector.
    fn into_vector(values: Vec<Self>) -> Vector;
}

impl RandValue for f64 {
    const MISSING: Self = NA_REAL;
    const WARNING: RandWarning = RandWarning::NaProduced;

    #[inline]
    fn is_missing(&self) -> bool {
        self.is_nan()
    }

    fn into_vector(values: Vec<Self>) -> Vector {
        Vector::Double(values)
    }
}

impl RandValue for i32 {
    const MISSING: Self = NA_INTEGER;
    const WARNING: RandWarning = RandWarning::NanProduced;

    #[inline]
    fn is_missing(&self) -> bool {
        *self == NA_INTEGER
    }

    fn into_vector(values: Vec<Self>) -> Vector {
        Vector::Integer(values)
    }
}

/// Result of a vectorized call.
#[derive(Clone, Debug, PartialEq)]
pub struct RandVector<T> {
    pub values: Vec<T>,
    /// `true` iff no element is missing.
    pub complete: bool,
    /// Set at most once per call.
    pub warning: Option<RandWarning>,
}

impl<T: RandValue> RandVector<T> {
    pub fn into_vector(self) -> Vector {
        T::into_vector(self.values)
    }
}

/// Evaluates `function` for every output position over recycled parameters.
///
/// The generator of `context` is acquired once before the loop and released
/// once after it.
///
/// # Examples
///
/// ```
/// use statorder::dispatch::evaluate_vector;
/// use statorder::rng::RngContext;
///
/// let mut ctx = RngContext::from_seed(1);
/// let out = evaluate_vector(&mut ctx, 5, [&[1.0, 2.0][..], &[10.0][..]], |[a, b], _| a + b);
/// assert_eq!(out.values, vec![11.0, 12.0, 11.0, 12.0, 11.0]);
/// assert!(out.complete);
/// assert_eq!(out.warning, None);
/// ```
pub fn evaluate_vector<T, F, const N: usize>(
    context: &mut RngContext,
    length: usize,
    params: [&[f64]; N],
    mut function: F,
) -> RandVector<T>
where
    T: RandValue,
    F: FnMut([f64; N], &mut RandomNumberProvider<'_>) -> T,
{
    let _span = debug_span!("evaluate_vector", length, params = N).entered();

    if params.iter().any(|p| p.is_empty()) {
        warn!(warning = %T::WARNING, "empty parameter vector");
        return RandVector {
            values: vec![T::MISSING; length],
            complete: false,
            warning: Some(T::WARNING),
        };
    }

    let mut values = Vec::with_capacity(length);
    let mut nans = false;
    {
        let mut rand = context.acquire();
        for i in 0..length {
            let args: [f64; N] = std::array::from_fn(|k| params[k][i % params[k].len()]);
            let value = function(args, &mut rand);
            nans |= value.is_missing();
            values.push(value);
        }
    }

    let warning = if nans {
        warn!(warning = %T::WARNING, "missing values in generated vector");
        Some(T::WARNING)
    } else {
        None
    };
    RandVector {
        values,
        complete: !nans,
        warning,
    }
}

/// Resolves a length argument to a concrete output length.
///
/// A vector whose length is not 1 stands for its own length. A length-one
/// vector is read as a count: reals are truncated toward zero, logicals
/// count as 0/1, strings are parsed as numbers and complex values use their
/// real part.
///
/// # Errors
///
/// [`Error::InvalidLengthSpec`] if the count is NA, NaN, negative or beyond
/// the integer range.
///
/// # Examples
///
/// ```
/// use statorder::dispatch::resolve_length;
/// use statorder::Vector;
///
/// assert_eq!(resolve_length(&Vector::Double(vec![4.9])).unwrap(), 4);
/// assert_eq!(resolve_length(&Vector::Integer(vec![7, 8, 9])).unwrap(), 3);
/// assert!(resolve_length(&Vector::Integer(vec![-1])).is_err());
/// ```
pub fn resolve_length(spec: &Vector) -> Result<usize> {
    if spec.len() != 1 {
        return Ok(spec.len());
    }

    let count = match spec {
        Vector::Integer(v) => (!v[0].is_na()).then_some(f64::from(v[0])),
        Vector::Double(v) => Some(v[0]),
        Vector::Logical(v) => v[0].map(|b| if b { 1.0 } else { 0.0 }),
        Vector::Character(v) => v[0].as_deref().and_then(|s| s.trim().parse::<f64>().ok()),
        Vector::Complex(v) => Some(v[0].re),
    };

    match count.map(f64::trunc) {
        Some(n) if n >= 0.0 && n <= f64::from(i32::MAX) => Ok(n as usize),
        Some(n) => Err(Error::InvalidLengthSpec(n.to_string())),
        None => Err(Error::InvalidLengthSpec("NA".to_string())),
    }
}

/// Resolves `length_spec` then evaluates `function` over it.
///
/// # Errors
///
/// Propagates [`resolve_length`] failures; no generator state is touched then.
pub fn generate<T, F, const N: usize>(
    context: &mut RngContext,
    length_spec: &Vector,
    params: [&[f64]; N],
    function: F,
) -> Result<RandVector<T>>
where
    T: RandValue,
    F: FnMut([f64; N], &mut RandomNumberProvider<'_>) -> T,
{
    let length = resolve_length(length_spec)?;
    Ok(evaluate_vector(context, length, params, function))
}
