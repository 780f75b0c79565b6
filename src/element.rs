//! Element types the sorts accept.
//!
//! Every supported element implements [`RadixSortable`]. Integers sort directly on their own bit
//! pattern, floats sort on a same-width unsigned integer key produced by the bit-flip transform
//! in [`crate::float`].

use core::cmp::Ordering;
use core::fmt::Debug;

use bytemuck::Pod;
use num_traits::{AsPrimitive, CheckedShl, PrimInt, WrappingShl};

use crate::comparison;
use crate::cutoff::CutoffPolicy;
use crate::detect::{detect, Width};
use crate::float;
use crate::radix;

mod private {
    pub trait Sealed {}
}

/// Fixed-width integer the radix engine can bucket byte by byte.
pub trait RadixInt:
    PrimInt
    + CheckedShl
    + WrappingShl
    + AsPrimitive<u8>
    + Default
    + Debug
    + Send
    + Sync
    + 'static
    + private::Sealed
{
}

/// IEEE-754 float that is sorted through an unsigned integer view of its bits.
pub trait RadixFloat: Pod + PartialOrd + Default + Debug + Send + Sync + private::Sealed {
    /// Unsigned integer with the same width as the float.
    type Bits: RadixInt + Pod;

    fn is_nan(self) -> bool;

    fn total_cmp(&self, other: &Self) -> Ordering;
}

/// Element type accepted by [`crate::sort`], [`crate::Sorter`] and friends.
///
/// Implemented for `u8 u16 u32 u64 usize i8 i16 i32 i64 isize f32 f64`. The trait is sealed.
pub trait RadixSortable:
    Copy + PartialOrd + Default + Debug + Send + Sync + 'static + private::Sealed
{
    /// Integer key the radix engine works on.
    type Key: RadixInt;

    #[doc(hidden)]
    fn key_width() -> Width<Self::Key>;

    #[doc(hidden)]
    fn cutoff(policy: &CutoffPolicy) -> usize;

    #[doc(hidden)]
    fn comparison_sort(v: &mut [Self]);

    #[doc(hidden)]
    fn radix_sort(v: &mut [Self], buf: &mut [Self], width: Width<Self::Key>);
}

macro_rules! impl_radix_int {
    ($($t:ty)*) => ($(
        impl private::Sealed for $t {}

        impl RadixInt for $t {}

        impl RadixSortable for $t {
            type Key = $t;

            #[inline]
            fn key_width() -> Width<$t> {
                detect::<$t>()
            }

            #[inline]
            fn cutoff(policy: &CutoffPolicy) -> usize {
                if Self::key_width().bits == 64 {
                    policy.int64
                } else {
                    policy.int
                }
            }

            #[inline]
            fn comparison_sort(v: &mut [$t]) {
                v.sort_unstable();
            }

            #[inline]
            fn radix_sort(v: &mut [$t], buf: &mut [$t], width: Width<$t>) {
                radix::sort_integers(v, buf, width);
            }
        }
    )*)
}

impl_radix_int! { u8 u16 u32 u64 usize i8 i16 i32 i64 isize }

macro_rules! impl_radix_float {
    ($($t:ty => $bits:ty, $cutoff:ident;)*) => ($(
        impl private::Sealed for $t {}

        impl RadixFloat for $t {
            type Bits = $bits;

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                <$t>::total_cmp(self, other)
            }
        }

        impl RadixSortable for $t {
            type Key = $bits;

            #[inline]
            fn key_width() -> Width<$bits> {
                detect::<$bits>()
            }

            #[inline]
            fn cutoff(policy: &CutoffPolicy) -> usize {
                policy.$cutoff
            }

            #[inline]
            fn comparison_sort(v: &mut [$t]) {
                comparison::sort_floats(v);
            }

            #[inline]
            fn radix_sort(v: &mut [$t], buf: &mut [$t], width: Width<$bits>) {
                float::sort_floats_with_width(v, buf, width);
            }
        }
    )*)
}

impl_radix_float! {
    f32 => u32, float32;
    f64 => u64, float64;
}
