use std::mem;

use bytemuck::Pod;

use lsd_sort::RadixSortable;

/// Reinterprets the fuzzer input as a vec of `T`, dropping trailing bytes that don't fill a whole
/// element.
pub fn u8_as_x<T: Pod>(data: &[u8]) -> Vec<T> {
    data.chunks_exact(mem::size_of::<T>())
        .map(bytemuck::pod_read_unaligned)
        .collect()
}

/// Sorts `v` with the stateless sort and the always radix path and checks both against
/// `sort_unstable_by` on the total order, with NaNs in front.
pub fn check_against_std<T: RadixSortable>(
    v: Vec<T>,
    total_cmp: impl Fn(&T, &T) -> std::cmp::Ordering,
) {
    #[allow(clippy::eq_op)]
    let is_nan = |val: &T| val != val;

    let mut expected = v.clone();
    expected.sort_unstable_by(|a, b| match (is_nan(a), is_nan(b)) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        (false, false) => total_cmp(a, b),
    });

    let mut sorted = v.clone();
    lsd_sort::sort(&mut sorted);

    let mut radixed = v;
    let mut buf = vec![T::default(); radixed.len()];
    lsd_sort::sort_with_buffer(&mut radixed, &mut buf);

    for result in [&sorted, &radixed] {
        assert_eq!(result.len(), expected.len());
        for (a, b) in result.iter().zip(&expected) {
            assert!(
                (is_nan(a) && is_nan(b)) || a == b,
                "{result:?} != {expected:?}"
            );
        }
    }
}
