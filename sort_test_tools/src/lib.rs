//! Shared harness for testing and benchmarking slice sorts.

/// A sort implementation under test.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;

    /// Sorts the closed range `arr[low..=high]` and does nothing when `low >= high`.
    ///
    /// Implementations without a range entry point get one that sorts the sub-slice.
    fn sort_range<T>(arr: &mut [T], low: isize, high: isize)
    where
        T: Ord,
    {
        if low < high {
            Self::sort(&mut arr[low as usize..=high as usize]);
        }
    }
}

pub mod patterns;
