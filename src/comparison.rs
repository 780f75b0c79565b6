//! Comparison sorts used below the radix cutoff and for foreign types.

use crate::element::RadixFloat;
use crate::float::partition_nans;

/// Sorts floats with `sort_unstable_by`, NaNs first like the radix path.
pub(crate) fn sort_floats<F: RadixFloat>(v: &mut [F]) {
    let nans = partition_nans(v);
    v[nans..].sort_unstable_by(F::total_cmp);
}

/// Index based access to a sequence that can be sorted in place.
///
/// For types the radix sorts don't cover. `less` must define a strict weak order.
pub trait SortInterface {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the element at `i` must sort before the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    fn swap(&mut self, i: usize, j: usize);
}

impl<T: Ord> SortInterface for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}

/// Sorts `data` ascending by `less` with heapsort, in place and *O*(*n* \* log(*n*)).
pub fn sort_interface(data: &mut dyn SortInterface) {
    let len = data.len();
    if len < 2 {
        return;
    }

    // Build the heap in linear time.
    for node in (0..len / 2).rev() {
        sift_down(data, node, len);
    }

    // Pop maximal elements from the heap.
    for end in (1..len).rev() {
        data.swap(0, end);
        sift_down(data, 0, end);
    }
}

// The heap in `data[..end]` respects the invariant `parent >= child`.
fn sift_down(data: &mut dyn SortInterface, mut node: usize, end: usize) {
    loop {
        let mut child = 2 * node + 1;
        if child >= end {
            break;
        }

        // Choose the greater child.
        if child + 1 < end && data.less(child, child + 1) {
            child += 1;
        }

        if !data.less(node, child) {
            break;
        }

        data.swap(node, child);
        node = child;
    }
}
