use log::trace;

use crate::cutoff::CutoffPolicy;
use crate::detect::Width;
use crate::element::RadixSortable;

/// Sorts slices of `T`, keeping the radix scratch buffer around between calls.
///
/// The first radix sort allocates a buffer as long as the slice, later ones grow it with 25%
/// headroom whenever a longer slice comes along. The buffer never shrinks. Slices below the
/// cutoff are comparison sorted and leave the buffer alone.
///
/// Using a `Sorter` is much faster than repeated calls to [`crate::sort`] when many slices are
/// sorted. Each call takes `&mut self`, one instance serves one caller at a time; use one sorter
/// per thread to sort in parallel.
#[derive(Debug, Clone)]
pub struct Sorter<T: RadixSortable> {
    buf: Vec<T>,
    width: Width<T::Key>,
    cutoff: usize,
}

impl<T: RadixSortable> Sorter<T> {
    pub fn new() -> Self {
        Self::with_policy(CutoffPolicy::DEFAULT)
    }

    pub fn with_policy(policy: CutoffPolicy) -> Self {
        Self {
            buf: Vec::new(),
            width: T::key_width(),
            cutoff: policy.cutoff::<T>(),
        }
    }

    /// Sorts `v` ascending in place.
    pub fn sort(&mut self, v: &mut [T]) {
        let len = v.len();
        if len < 2 {
            return;
        }

        if len < self.cutoff {
            T::comparison_sort(v);
            return;
        }

        if self.buf.len() < len {
            let new_len = alloc_len(self.buf.len(), len);
            trace!(
                "growing scratch buffer from {} to {} elements",
                self.buf.len(),
                new_len
            );

            // Old contents are scratch, no need to keep them.
            self.buf = vec![T::default(); new_len];
        }

        T::radix_sort(v, &mut self.buf, self.width);
    }

    /// Returns a sorted copy of `v`, leaving `v` untouched.
    pub fn copy_sort(&mut self, v: &[T]) -> Vec<T> {
        let mut sorted = v.to_vec();
        self.sort(&mut sorted);
        sorted
    }

    /// Length of the scratch buffer currently held.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Slices shorter than this are comparison sorted.
    pub fn cutoff(&self) -> usize {
        self.cutoff
    }
}

impl<T: RadixSortable> Default for Sorter<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the new scratch length for a buffer of `cap` elements that must hold `len`.
///
/// The first allocation is exact, later ones leave 25% room for growth.
fn alloc_len(cap: usize, len: usize) -> usize {
    if cap == 0 {
        len
    } else {
        len.max(5 * cap / 4)
    }
}
