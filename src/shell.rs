//! Shell sort over index arrays.
//!
//! One sorting primitive serves both the value sort and the NA partition:
//! a gapped insertion sort driven by a caller-supplied `greater(a, b)`
//! predicate over original row indices. The predicate must be a strict
//! total order (ties broken by index), which makes the result deterministic
//! and stable.

use cuneiform::cuneiform;

/// Number of usable increments in [`INCREMENTS`] (the table ends with a 0 sentinel).
const NUM_INCREMENTS: usize = 16;

// Cache-aligned increment table.
#[cuneiform]
struct Increments {
    data: [usize; NUM_INCREMENTS + 1],
}

/// Descending gap sequence, each step roughly a quarter of the previous,
/// ending in 1 so the last pass is a plain insertion sort.
static INCREMENTS: Increments = Increments {
    data: [
        1073790977, 268460033, 67121153, 16783361, 4197377, 1050113, 262913, 65921, 16577, 4193,
        1073, 281, 77, 23, 8, 1, 0,
    ],
};

/// Position in [`INCREMENTS`] of the largest gap not exceeding `len`.
#[inline]
fn first_increment(len: usize) -> usize {
    INCREMENTS.data[..NUM_INCREMENTS]
        .iter()
        .position(|&h| h <= len)
        .unwrap_or(NUM_INCREMENTS)
}

/// Sorts `index` in place so that no element is `greater` than its successor.
///
/// `greater(a, b)` receives two row indices taken from `index` and must
/// return `true` when row `a` belongs after row `b`. Sorting a sub-range is
/// done by passing the sub-slice.
///
/// # Examples
///
/// ```
/// use statorder::shell::shell_sort;
///
/// let values = [30, 10, 20, 10];
/// let mut index: Vec<usize> = (0..values.len()).collect();
/// shell_sort(&mut index, |a, b| values[a] > values[b] || (values[a] == values[b] && a > b));
/// assert_eq!(index, vec![1, 3, 2, 0]);
/// ```
pub fn shell_sort<F>(index: &mut [usize], mut greater: F)
where
    F: FnMut(usize, usize) -> bool,
{
    let len = index.len();
    if len < 2 {
        return;
    }

    for &h in &INCREMENTS.data[first_increment(len)..NUM_INCREMENTS] {
        for i in h..len {
            let held = index[i];
            let mut j = i;
            while j >= h && greater(index[j - h], held) {
                index[j] = index[j - h];
                j -= h;
            }
            index[j] = held;
        }
    }
}

/// Moves every row marked in `is_na` to one end of `index`.
///
/// Missing rows go to the back when `na_last`, to the front otherwise. Both
/// blocks end up in ascending index order. Returns the number of missing
/// rows found in `index`.
///
/// # Examples
///
/// ```
/// use statorder::shell::partition_na;
///
/// let is_na = [false, true, false, true];
/// let mut index = vec![0, 1, 2, 3];
/// let num_na = partition_na(&mut index, &is_na, true);
/// assert_eq!(num_na, 2);
/// assert_eq!(index, vec![0, 2, 1, 3]);
/// ```
pub fn partition_na(index: &mut [usize], is_na: &[bool], na_last: bool) -> usize {
    let num_na = index.iter().filter(|&&i| is_na[i]).count();
    shell_sort(index, |a, b| {
        let (na_a, na_b) = (is_na[a], is_na[b]);
        if na_a == na_b {
            a > b
        } else {
            na_a == na_last
        }
    });
    num_na
}
