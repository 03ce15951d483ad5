use std::ops::RangeInclusive;

use thiserror::Error;

/// A closed `[low, high]` range that does not fit the slice it was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("range start {low} is negative (slice length {len})")]
    LowOutOfBounds { low: isize, len: usize },

    #[error("range end {high} is out of bounds for slice of length {len}")]
    HighOutOfBounds { high: isize, len: usize },
}

/// Maps a closed `[low, high]` range onto `0..len`.
///
/// `low >= high` is the base case and yields `Ok(None)` without looking at the bounds, so
/// `(0, -1)` on an empty slice is fine.
pub(crate) fn resolve(
    len: usize,
    low: isize,
    high: isize,
) -> Result<Option<RangeInclusive<usize>>, RangeError> {
    if low >= high {
        return Ok(None);
    }

    let start = usize::try_from(low).map_err(|_| RangeError::LowOutOfBounds { low, len })?;

    // high > low >= 0 here.
    let end = high as usize;
    if end >= len {
        return Err(RangeError::HighOutOfBounds { high, len });
    }

    Ok(Some(start..=end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_singleton_are_noops() {
        assert_eq!(resolve(0, 0, -1), Ok(None));
        assert_eq!(resolve(5, 3, 3), Ok(None));
        assert_eq!(resolve(5, 4, 1), Ok(None));
        // Bounds are not inspected for the base case.
        assert_eq!(resolve(0, 100, -100), Ok(None));
        assert_eq!(resolve(3, 7, 7), Ok(None));
    }

    #[test]
    fn valid_ranges() {
        assert_eq!(resolve(100, 0, 99), Ok(Some(0..=99)));
        assert_eq!(resolve(10, 2, 5), Ok(Some(2..=5)));
        assert_eq!(resolve(2, 0, 1), Ok(Some(0..=1)));
    }

    #[test]
    fn out_of_bounds() {
        assert_eq!(
            resolve(10, -1, 5),
            Err(RangeError::LowOutOfBounds { low: -1, len: 10 })
        );
        assert_eq!(
            resolve(10, 0, 10),
            Err(RangeError::HighOutOfBounds { high: 10, len: 10 })
        );
        assert_eq!(
            resolve(0, 0, 1),
            Err(RangeError::HighOutOfBounds { high: 1, len: 0 })
        );
    }

    #[test]
    fn error_messages() {
        let err = RangeError::HighOutOfBounds { high: 10, len: 4 };
        assert_eq!(
            err.to_string(),
            "range end 10 is out of bounds for slice of length 4"
        );

        let err = RangeError::LowOutOfBounds { low: -3, len: 4 };
        assert_eq!(err.to_string(), "range start -3 is negative (slice length 4)");
    }
}
