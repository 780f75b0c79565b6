//! LSD radix sort over fixed-width integers, one byte per pass.

use core::mem;

use crate::detect::Width;
use crate::element::RadixInt;

const RADIX: u32 = 8;
const BUCKETS: usize = 1 << RADIX;

/// Which of the two ping-pong buffers holds the sorted data once the passes are done.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Live {
    Slice,
    Buffer,
}

impl Live {
    #[inline]
    fn flip(self) -> Self {
        match self {
            Live::Slice => Live::Buffer,
            Live::Buffer => Live::Slice,
        }
    }
}

/// Sorts `v` ascending with LSD radix sort, using `buf` as scratch space.
///
/// `width` must describe `T`, see [`crate::detect::detect`]. The contents of `buf` are
/// unspecified afterwards.
///
/// # Panics
///
/// Panics if `buf` is shorter than `v`, before touching either slice.
pub fn sort_integers<T: RadixInt>(v: &mut [T], buf: &mut [T], width: Width<T>) {
    assert!(
        buf.len() >= v.len(),
        "scratch buffer too small: buffer has {} elements, slice has {}",
        buf.len(),
        v.len()
    );

    if v.len() < 2 {
        return;
    }

    let buf = &mut buf[..v.len()];
    if radix_passes(v, buf, width) == Live::Buffer {
        v.copy_from_slice(buf);
    }
}

fn radix_passes<T: RadixInt>(v: &mut [T], buf: &mut [T], width: Width<T>) -> Live {
    debug_assert_eq!(v.len(), buf.len());

    let mut from: &mut [T] = v;
    let mut to: &mut [T] = buf;
    let mut live = Live::Slice;

    let last_offset = width.bits - RADIX;
    let mut key_offset = 0;
    while key_offset < width.bits {
        let mut offsets = [0usize; BUCKETS];

        if count_digits(from, &mut offsets, key_offset, width.min) {
            // The whole elements are already non-decreasing, the remaining passes would not
            // move anything.
            break;
        }

        if width.is_signed() && key_offset == last_offset {
            bucket_starts_signed(&mut offsets);
        } else {
            bucket_starts(&mut offsets);
        }

        scatter(from, to, &mut offsets, key_offset);

        mem::swap(&mut from, &mut to);
        live = live.flip();
        key_offset += RADIX;
    }

    live
}

#[inline(always)]
fn digit<T: RadixInt>(elem: T, key_offset: u32) -> usize {
    let byte: u8 = (elem >> key_offset as usize).as_();
    byte as usize
}

/// Fills `counts` with the histogram of the byte at `key_offset`, and returns whether `src` is
/// already sorted.
#[inline]
fn count_digits<T: RadixInt>(
    src: &[T],
    counts: &mut [usize; BUCKETS],
    key_offset: u32,
    min: T,
) -> bool {
    let mut prev = min;
    let mut sorted = true;

    for &elem in src {
        counts[digit(elem, key_offset)] += 1;
        if sorted {
            sorted = elem >= prev;
            prev = elem;
        }
    }

    sorted
}

#[inline]
fn bucket_starts(counts: &mut [usize; BUCKETS]) {
    let mut watermark = 0;
    for count in counts.iter_mut() {
        let n = *count;
        *count = watermark;
        watermark += n;
    }
}

/// Like [`bucket_starts`], but places the bytes with the top bit set (negative numbers) before
/// all others. Only valid for the most significant byte of a signed type.
#[inline]
fn bucket_starts_signed(counts: &mut [usize; BUCKETS]) {
    let (positives, negatives) = counts.split_at_mut(BUCKETS / 2);

    let mut watermark = 0;
    for count in negatives.iter_mut().chain(positives.iter_mut()) {
        let n = *count;
        *count = watermark;
        watermark += n;
    }
}

#[inline]
fn scatter<T: RadixInt>(src: &[T], dst: &mut [T], offsets: &mut [usize; BUCKETS], key_offset: u32) {
    for &elem in src {
        let key = digit(elem, key_offset);
        dst[offsets[key]] = elem;
        offsets[key] += 1;
    }
}
