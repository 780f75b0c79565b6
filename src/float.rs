//! Radix sorting of floats through a bit-flipped unsigned integer view.
//!
//! Negative floats have the sign bit set and grow in magnitude as their remaining bits grow, so
//! flipping every bit of a negative float and only the sign bit of a positive one yields
//! unsigned integers in the same order as the floats:
//!
//! ```plaintext
//!  -inf: 1111_1111_1000_0000.. -> 0000_0000_0111_1111..
//!  -1.0: 1011_1111_1000_0000.. -> 0100_0000_0111_1111..
//!  -0.0: 1000_0000_0000_0000.. -> 0111_1111_1111_1111..
//!   0.0: 0000_0000_0000_0000.. -> 1000_0000_0000_0000..
//!   1.0: 0011_1111_1000_0000.. -> 1011_1111_1000_0000..
//!   inf: 0111_1111_1000_0000.. -> 1111_1111_1000_0000..
//! ```
//!
//! NaNs have no place in that order and are moved to the front before flipping.

use num_traits::One;

use crate::detect::{detect, Width};
use crate::element::{RadixFloat, RadixInt};
use crate::radix;

/// Sorts `v` ascending with radix sort, using `buf` as scratch space.
///
/// NaNs end up in front in unspecified order, followed by the remaining values ascending.
/// `-0.0` and `0.0` compare equal and may appear in either order.
///
/// # Panics
///
/// Panics if `buf` is shorter than `v`, before touching either slice.
pub fn sort_floats<F: RadixFloat>(v: &mut [F], buf: &mut [F]) {
    sort_floats_with_width(v, buf, detect::<F::Bits>());
}

pub(crate) fn sort_floats_with_width<F: RadixFloat>(
    v: &mut [F],
    buf: &mut [F],
    width: Width<F::Bits>,
) {
    assert!(
        buf.len() >= v.len(),
        "scratch buffer too small: buffer has {} elements, slice has {}",
        buf.len(),
        v.len()
    );

    let nans = partition_nans(v);
    let v = &mut v[nans..];
    if v.len() < 2 {
        return;
    }

    // Same size and alignment, every bit pattern valid on both sides. The views borrow `v` and
    // `buf` exclusively, so neither can be resized or dropped while they are in use.
    let keys: &mut [F::Bits] = bytemuck::cast_slice_mut(v);
    let scratch: &mut [F::Bits] = bytemuck::cast_slice_mut(&mut buf[..keys.len()]);

    let top_bit = F::Bits::one() << (width.bits - 1) as usize;

    flip(keys, top_bit);
    radix::sort_integers(keys, scratch, width);
    unflip(keys, top_bit);
}

/// Moves every NaN in `v` to the front and returns how many there are.
///
/// Each NaN found is swapped with the first non-NaN slot, so the rest keep their multiset.
pub(crate) fn partition_nans<F: RadixFloat>(v: &mut [F]) -> usize {
    let mut nans = 0;
    for i in 0..v.len() {
        if v[i].is_nan() {
            v.swap(i, nans);
            nans += 1;
        }
    }

    nans
}

#[inline]
fn flip<U: RadixInt>(keys: &mut [U], top_bit: U) {
    for key in keys {
        if *key & top_bit == top_bit {
            *key = *key ^ !U::zero();
        } else {
            *key = *key ^ top_bit;
        }
    }
}

#[inline]
fn unflip<U: RadixInt>(keys: &mut [U], top_bit: U) {
    for key in keys {
        if *key & top_bit == top_bit {
            *key = *key ^ top_bit;
        } else {
            *key = *key ^ !U::zero();
        }
    }
}
