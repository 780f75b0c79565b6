#![no_main]

use libfuzzer_sys::fuzz_target;

use lsd_sort_fuzz::check_against_std;

fuzz_target!(|data: &[u8]| {
    check_against_std(data.to_vec(), |a, b| a.cmp(b));
});
