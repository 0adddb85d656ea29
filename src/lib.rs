//! # statorder
//!
//! `statorder` provides the ordering and random-generation kernels behind
//! statistical vector languages:
//!
//! - **NA-aware ordering**: the permutation that sorts one or more typed
//!   columns (integer, real, logical, character, complex), with missing
//!   values placed first or last and a stable, index-based tie-break in both
//!   directions.
//! - **Vectorized random generation**: per-element distribution formulas
//!   applied over recycled parameter vectors, with missing results reported
//!   once per call.
//!
//! ## Usage
//!
//! ### Ordering
//!
//! ```rust
//! use statorder::{order, OrderOptions, Vector};
//! use statorder::core::NA_REAL;
//!
//! let x = Vector::Double(vec![2.5, NA_REAL, -1.0, 2.5]);
//! let perm = order(&[x], OrderOptions::default()).unwrap();
//! assert_eq!(perm, vec![2, 0, 3, 1]);
//! ```
//!
//! Several columns order lexicographically, later columns breaking ties of
//! earlier ones:
//!
//! ```rust
//! use statorder::{order, OrderOptions, Vector};
//!
//! let columns = vec![
//!     Vector::Integer(vec![2, 1, 2]),
//!     Vector::character([Some("x"), Some("y"), Some("a")]),
//! ];
//! let perm = order(&columns, OrderOptions::new(true, true)).unwrap();
//! assert_eq!(perm, vec![0, 2, 1]);
//! ```
//!
//! ### Custom Keys
//!
//! Any column storage can be ordered by implementing [`OrderKey`]; see
//! [`order_by`] and [`order_columns`].
//!
//! ### Random Generation
//!
//! ```rust
//! use statorder::dispatch::evaluate_vector;
//! use statorder::distributions::rcauchy;
//! use statorder::rng::RngContext;
//!
//! let mut ctx = RngContext::from_seed(42);
//! let out = evaluate_vector(&mut ctx, 4, [&[0.0][..], &[1.0, -1.0][..]], |[l, s], r| {
//!     rcauchy(l, s, r)
//! });
//! assert_eq!(out.values.len(), 4);
//! assert!(!out.complete); // negative scale yields missing values
//! assert!(out.warning.is_some());
//! ```
//!
//! ## Algorithm
//!
//! Orders are computed by a Shell sort over an index array, with the gap
//! sequence 1073790977, 268460033, ..., 23, 8, 1. The same primitive
//! partitions missing rows. Ties are broken by row index, so the
//! permutation is fully determined by the input.

pub mod algo;
pub mod collate;
pub mod compare;
pub mod core;
pub mod dispatch;
pub mod distributions;
pub mod error;
pub mod rng;
pub mod shell;
pub mod special;

pub use algo::{OrderOptions, one_based, order, order_by, order_columns};
pub use crate::core::{OrderKey, Vector};
pub use error::{Error, RandWarning, Result};

pub mod prelude {
    pub use crate::algo::{OrderOptions, one_based, order, order_by, order_columns};
    pub use crate::core::{Complex, NA_INTEGER, NA_REAL, OrderKey, OrderValue, Vector};
    pub use crate::dispatch::{RandValue, RandVector, evaluate_vector, generate, resolve_length};
    pub use crate::error::{Error, RandWarning};
    pub use crate::rng::{NormKind, RandomNumberProvider, RngConfig, RngContext};
}
