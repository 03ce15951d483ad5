#![no_main]

use libfuzzer_sys::fuzz_target;

// The first two bytes pick the closed range, the rest is the input.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let low = data[0] as isize - 8;
    let high = data[1] as isize - 8;
    let mut v = data[2..].to_vec();

    match quicksort_3way::try_sort_range(&mut v, low, high) {
        Ok(()) if low < high => {
            let (low, high) = (low as usize, high as usize);
            assert!(v[low..=high].windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(v[..low], data[2..][..low]);
            assert_eq!(v[high + 1..], data[2..][high + 1..]);
        }
        Ok(()) | Err(_) => assert_eq!(v, &data[2..]),
    }
});
