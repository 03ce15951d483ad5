//! Quicksort with Dijkstra's three-way partition and a fixed first-element pivot.

/// Sorts `v` using `is_less` as the strict weak ordering.
///
/// Every element equal to the pivot ends up in a single band that is never looked at again, so
/// inputs with few distinct values are handled in linear time per level. The pivot is always the
/// first element, which makes already sorted or reverse sorted inputs of distinct values
/// quadratic.
pub(crate) fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let (lt, gt) = partition(v, is_less);

        let (left, rest) = std::mem::take(&mut v).split_at_mut(lt);
        let right = &mut rest[(gt - lt + 1)..];

        // Recurse into the shorter side and continue with the longer one, this limits the call
        // depth to O(log(n)) even for adversarial inputs.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around its first element and returns the inclusive bounds `(lt, gt)` of the
/// band of elements equal to it.
///
/// Afterwards `v[..lt]` is less than the pivot, `v[lt..=gt]` is equal to it and `v[gt + 1..]` is
/// greater than it.
///
/// Panics if `v` is empty.
pub(crate) fn partition<T, F>(v: &mut [T], is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(len > 0, "cannot partition an empty slice");

    // Loop invariant:
    // v[..lt] < pivot, v[lt..i] == pivot, v[i..=gt] unclassified, v[gt + 1..] > pivot.
    //
    // v[lt..i] always holds at least the pivot itself, so v[lt] can stand in for the pivot value
    // without copying it out of the slice.
    let mut lt = 0;
    let mut i = 1;
    let mut gt = len - 1;

    while i <= gt {
        if is_less(&v[i], &v[lt]) {
            v.swap(i, lt);
            lt += 1;
            i += 1;
        } else if is_less(&v[lt], &v[i]) {
            v.swap(i, gt);
            // i <= gt and i >= 1, no underflow.
            gt -= 1;
        } else {
            i += 1;
        }
    }

    (lt, gt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lt(a: &i32, b: &i32) -> bool {
        a < b
    }

    fn check_partition(input: &[i32]) {
        let pivot = input[0];
        let mut v = input.to_vec();
        let (lt_idx, gt_idx) = partition(&mut v, &mut lt);

        assert!(lt_idx <= gt_idx && gt_idx < v.len());
        assert!(v[..lt_idx].iter().all(|&x| x < pivot), "{v:?}");
        assert!(v[lt_idx..=gt_idx].iter().all(|&x| x == pivot), "{v:?}");
        assert!(v[gt_idx + 1..].iter().all(|&x| x > pivot), "{v:?}");

        let mut a = input.to_vec();
        let mut b = v.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn partition_bands() {
        check_partition(&[5]);
        check_partition(&[1, 2]);
        check_partition(&[2, 1]);
        check_partition(&[3, 3, 3, 3]);
        check_partition(&[0, 1, 0, 1, 0, 1]);
        check_partition(&[1, 0, 1, 0, 1, 0]);
        check_partition(&[4, 9, 4, -2, 7, 4, 0, 11, 4]);
        check_partition(&[10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        check_partition(&[i32::MIN, i32::MAX, 0, i32::MIN]);
    }

    #[test]
    fn partition_known_layout() {
        let mut v = [3, 5, 1, 3, 4, 2];
        let bounds = partition(&mut v, &mut lt);

        assert_eq!(bounds, (2, 3));
        assert_eq!(v, [2, 1, 3, 3, 4, 5]);
    }

    #[test]
    fn all_equal_is_one_pass() {
        let mut v = [7; 50];
        let mut comps = 0;
        let bounds = partition(&mut v, &mut |a: &i32, b: &i32| {
            comps += 1;
            a < b
        });

        assert_eq!(bounds, (0, 49));
        assert_eq!(comps, 2 * 49);
    }

    #[test]
    #[should_panic(expected = "cannot partition an empty slice")]
    fn partition_empty_panics() {
        partition::<i32, _>(&mut [], &mut lt);
    }

    #[test]
    fn quicksort_small_inputs() {
        let inputs: [&[i32]; 6] = [
            &[],
            &[1],
            &[2, 1],
            &[1, 1, 0],
            &[5, -1, 5, 3, 0, 5, 2],
            &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
        ];

        for input in inputs {
            let mut v = input.to_vec();
            let mut expected = input.to_vec();
            expected.sort();

            quicksort(&mut v, &mut lt);
            assert_eq!(v, expected);
        }
    }
}
