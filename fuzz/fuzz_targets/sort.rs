#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    quicksort_3way::sort(&mut v);

    assert!(v.windows(2).all(|w| w[0] <= w[1]));

    let mut expected = data.to_vec();
    expected.sort_unstable();
    assert_eq!(v, expected);
});
