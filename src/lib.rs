//! Radix sorting for slices of integers and floats.
//!
//! Long slices are sorted with an out-of-place LSD radix sort, one byte per pass, short ones with
//! `sort_unstable`. Signed integers are ordered by bucketing the top byte negatives first, floats
//! by sorting a bit-flipped unsigned view of them, with NaNs moved to the front.
//!
//! ```
//! let mut v = [5i8, -3, 0, 127, -128];
//! lsd_sort::sort(&mut v);
//! assert_eq!(v, [-128, -3, 0, 5, 127]);
//! ```
//!
//! Repeated sorts should reuse their scratch space through a [`Sorter`].

pub mod comparison;
pub mod cutoff;
pub mod detect;
pub mod dynamic;
pub mod element;
pub mod error;
pub mod float;
pub mod radix;
pub mod sorter;

pub use comparison::{sort_interface, SortInterface};
pub use cutoff::CutoffPolicy;
pub use detect::{detect, Width};
pub use dynamic::{sort_dyn, AnySorter};
pub use element::{RadixFloat, RadixInt, RadixSortable};
pub use error::{Error, Result};
pub use sorter::Sorter;

/// Sorts the slice ascending, but might not preserve the order of equal elements.
///
/// Slices shorter than the [`CutoffPolicy::DEFAULT`] threshold for `T` are comparison sorted,
/// longer ones are radix sorted with a freshly allocated scratch buffer.
///
/// For floats NaNs are moved to the front in unspecified order, and `-0.0` and `0.0` may appear
/// in either order.
#[inline]
pub fn sort<T: RadixSortable>(v: &mut [T]) {
    sort_with_policy(v, &CutoffPolicy::DEFAULT);
}

/// Like [`sort`], with the comparison sort cutoff taken from `policy`.
pub fn sort_with_policy<T: RadixSortable>(v: &mut [T], policy: &CutoffPolicy) {
    let len = v.len();
    if len < 2 {
        return;
    }

    if policy.should_use_comparison_sort::<T>(len) {
        T::comparison_sort(v);
    } else {
        let mut buf = vec![T::default(); len];
        T::radix_sort(v, &mut buf, T::key_width());
    }
}

/// Radix sorts the slice ascending, using `buf` as scratch space.
///
/// Always radix sorts, whatever the length of `v`, for callers that already know radix sort pays
/// off and want to amortize the buffer themselves. The contents of `buf` are unspecified
/// afterwards.
///
/// # Panics
///
/// Panics if `buf` is shorter than `v`, before modifying `v`.
#[inline]
pub fn sort_with_buffer<T: RadixSortable>(v: &mut [T], buf: &mut [T]) {
    T::radix_sort(v, buf, T::key_width());
}

/// Like [`sort_with_buffer`], but reports a short buffer as [`Error::BufferTooSmall`] instead of
/// panicking. `v` is untouched on error.
pub fn try_sort_with_buffer<T: RadixSortable>(v: &mut [T], buf: &mut [T]) -> Result<()> {
    if buf.len() < v.len() {
        return Err(Error::BufferTooSmall {
            len: v.len(),
            buffer_len: buf.len(),
        });
    }

    sort_with_buffer(v, buf);
    Ok(())
}

/// Returns a sorted copy of `v`, leaving `v` untouched.
pub fn sort_copy<T: RadixSortable>(v: &[T]) -> Vec<T> {
    let mut sorted = v.to_vec();
    sort(&mut sorted);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_i8() {
        let mut v = [5i8, -3, 0, 127, -128];
        sort_with_policy(&mut v, &CutoffPolicy::ALWAYS_RADIX);
        assert_eq!(v, [-128, -3, 0, 5, 127]);
    }

    #[test]
    fn empty_and_singleton() {
        let mut v: [u64; 0] = [];
        sort(&mut v);
        sort_with_buffer(&mut v, &mut []);

        let mut v = [42.0f64];
        sort(&mut v);
        sort_with_buffer(&mut v, &mut [0.0]);
        assert_eq!(v, [42.0]);
    }

    #[test]
    fn try_buffer_too_small() {
        let mut v = [3u16, 2, 1];
        let mut buf = [0u16; 2];

        assert_eq!(
            try_sort_with_buffer(&mut v, &mut buf),
            Err(Error::BufferTooSmall {
                len: 3,
                buffer_len: 2
            })
        );
        assert_eq!(v, [3, 2, 1]);

        let mut buf = [0u16; 3];
        assert_eq!(try_sort_with_buffer(&mut v, &mut buf), Ok(()));
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn sort_copy_keeps_input() {
        let v = vec![9u32, 1, 5];
        assert_eq!(sort_copy(&v), [1, 5, 9]);
        assert_eq!(v, [9, 1, 5]);
    }
}
