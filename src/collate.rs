//! String collation for character keys.
//!
//! Ordering of character keys is locale-like but fixed, so results do not
//! depend on the host environment. Three levels are compared in turn:
//!
//! 1. **Primary**: the case-folded character sequences, by code point.
//!    `"apple" < "Banana" < "cherry"`.
//! 2. **Case**: at the first position whose case differs, lowercase sorts
//!    before uppercase. `"a" < "A"`.
//! 3. **Identity**: raw code point order, so only identical strings collate
//!    as equal.
//!
//! Accent folding and punctuation-ignoring rules of platform collators are
//! not applied.

use std::cmp::Ordering;

/// Compares two strings under the fixed collation described in the module docs.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use statorder::collate::collate;
///
/// assert_eq!(collate("apple", "Banana"), Ordering::Less);
/// assert_eq!(collate("a", "A"), Ordering::Less);
/// assert_eq!(collate("same", "same"), Ordering::Equal);
/// ```
pub fn collate(a: &str, b: &str) -> Ordering {
    primary(a, b)
        .then_with(|| case_level(a, b))
        .then_with(|| a.cmp(b))
}

#[inline]
fn primary(a: &str, b: &str) -> Ordering {
    let fa = a.chars().flat_map(char::to_lowercase);
    let fb = b.chars().flat_map(char::to_lowercase);
    fa.cmp(fb)
}

fn case_level(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
