#![no_main]

use libfuzzer_sys::fuzz_target;

use lsd_sort_fuzz::{check_against_std, u8_as_x};

fuzz_target!(|data: &[u8]| {
    check_against_std(u8_as_x::<f64>(data), f64::total_cmp);
});
