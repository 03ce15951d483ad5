//! In-place unstable sort built on Dijkstra's three-way partitioning quicksort.
//!
//! The pivot is always the first element of the range being sorted. Elements equal to the pivot
//! are gathered into one band and excluded from further work, which keeps inputs with many
//! duplicate keys fast. Inputs that are already sorted, or sorted in reverse, with distinct values
//! take *O*(*n*^2) comparisons.

use std::cmp::Ordering;

use tracing::{debug, trace};

mod quicksort;
mod range;

pub use range::RangeError;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case.
///
/// # Examples
///
/// ```
/// let mut v = [0, 1, 0, 1, 1, 0];
///
/// quicksort_3way::sort(&mut v);
/// assert_eq!(v, [0, 0, 0, 1, 1, 1]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort::quicksort(v, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function should define a total ordering for the elements in the slice. If it
/// does not, the resulting order is unspecified, but the slice still holds exactly the elements
/// it held before. The same is true if `compare` panics.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort::quicksort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Sorts the closed range `v[low..=high]`, leaving everything outside of it untouched.
///
/// Does nothing if `low >= high`, this includes the empty range `(0, -1)`.
///
/// # Panics
///
/// Panics if `low < high` and the range does not lie within `v`.
///
/// # Examples
///
/// ```
/// let mut v = [9, 4, 7, 1, 0];
///
/// quicksort_3way::sort_range(&mut v, 1, 3);
/// assert_eq!(v, [9, 1, 4, 7, 0]);
/// ```
#[inline]
pub fn sort_range<T>(v: &mut [T], low: isize, high: isize)
where
    T: Ord,
{
    sort_range_by(v, low, high, T::cmp);
}

/// Comparator version of [`sort_range`].
///
/// # Panics
///
/// Panics if `low < high` and the range does not lie within `v`.
#[inline]
pub fn sort_range_by<T, F>(v: &mut [T], low: isize, high: isize, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if let Err(err) = try_sort_range_by(v, low, high, compare) {
        panic!("{err}");
    }
}

/// Checked version of [`sort_range`]. On error `v` is left untouched.
///
/// # Examples
///
/// ```
/// use quicksort_3way::RangeError;
///
/// let mut v = [3, 2, 1];
///
/// assert_eq!(
///     quicksort_3way::try_sort_range(&mut v, 0, 3),
///     Err(RangeError::HighOutOfBounds { high: 3, len: 3 })
/// );
/// assert_eq!(v, [3, 2, 1]);
/// ```
#[inline]
pub fn try_sort_range<T>(v: &mut [T], low: isize, high: isize) -> Result<(), RangeError>
where
    T: Ord,
{
    try_sort_range_by(v, low, high, T::cmp)
}

/// Checked version of [`sort_range_by`]. On error `v` is left untouched.
#[inline]
pub fn try_sort_range_by<T, F>(
    v: &mut [T],
    low: isize,
    high: isize,
    compare: F,
) -> Result<(), RangeError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!(low, high, len = v.len(), "sort range");

    let range = range::resolve(v.len(), low, high).map_err(|err| {
        debug!(%err, "rejected sort range");
        err
    })?;

    if let Some(range) = range {
        sort_by(&mut v[range], compare);
    }

    Ok(())
}
