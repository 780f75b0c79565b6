//! Entry points for values whose element type is only known at runtime.
//!
//! Dispatch happens once per call by downcasting, the sorts themselves are monomorphized.

use std::any::{Any, TypeId};

use log::debug;

use crate::comparison::{sort_interface, SortInterface};
use crate::cutoff::CutoffPolicy;
use crate::error::{Error, Result};
use crate::sorter::Sorter;

/// Invokes `$m!` with every supported element type.
macro_rules! with_element_types {
    ($m:ident) => {
        $m!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
    };
}

/// Sorts `x` if it is a `Vec<T>` of a supported element type, a `Vec<String>` or a
/// `Box<dyn SortInterface>`. Strings are comparison sorted.
///
/// Returns [`Error::UnsupportedType`] for anything else, leaving `x` untouched.
pub fn sort_dyn(x: &mut dyn Any) -> Result<()> {
    macro_rules! sort_vec {
        ($($t:ty),*) => {
            $(
                if let Some(v) = x.downcast_mut::<Vec<$t>>() {
                    crate::sort(v);
                    return Ok(());
                }
            )*
        };
    }

    with_element_types!(sort_vec);

    if let Some(v) = x.downcast_mut::<Vec<String>>() {
        v.sort_unstable();
        return Ok(());
    }

    if let Some(data) = x.downcast_mut::<Box<dyn SortInterface>>() {
        sort_interface(&mut **data);
        return Ok(());
    }

    debug!("sort_dyn: unsupported value {:?}", (*x).type_id());
    Err(Error::UnsupportedType)
}

macro_rules! any_sorter {
    ($($t:ident),*) => {
        paste::paste! {
            /// Buffer-reusing sorter for values whose element type is only known at runtime.
            ///
            /// Holds one [`Sorter`] per supported element type, each created lazily on the first
            /// radix sort of that type. Not meant for concurrent use, see [`Sorter`].
            #[derive(Debug, Default)]
            pub struct AnySorter {
                $( [<sorter_ $t>]: Sorter<$t>, )*
            }

            impl AnySorter {
                pub fn new() -> Self {
                    Self::default()
                }

                /// Like [`AnySorter::new`], with every element type's cutoff taken from `policy`.
                pub fn with_policy(policy: CutoffPolicy) -> Self {
                    Self {
                        $( [<sorter_ $t>]: Sorter::with_policy(policy), )*
                    }
                }

                /// Sorts `x` in place, see [`sort_dyn`] for the accepted values.
                pub fn sort(&mut self, x: &mut dyn Any) -> Result<()> {
                    $(
                        if let Some(v) = x.downcast_mut::<Vec<$t>>() {
                            self.[<sorter_ $t>].sort(v);
                            return Ok(());
                        }
                    )*

                    if let Some(v) = x.downcast_mut::<Vec<String>>() {
                        v.sort_unstable();
                        return Ok(());
                    }

                    if let Some(data) = x.downcast_mut::<Box<dyn SortInterface>>() {
                        sort_interface(&mut **data);
                        return Ok(());
                    }

                    debug!("AnySorter::sort: unsupported value {:?}", (*x).type_id());
                    Err(Error::UnsupportedType)
                }

                /// Returns a sorted copy of `x` as a boxed `Vec<T>`, leaving `x` untouched.
                ///
                /// Only `Vec<T>` of supported element types and `Vec<String>` can be copied.
                pub fn copy_sort(&mut self, x: &dyn Any) -> Result<Box<dyn Any>> {
                    $(
                        if let Some(v) = x.downcast_ref::<Vec<$t>>() {
                            return Ok(Box::new(self.[<sorter_ $t>].copy_sort(v)));
                        }
                    )*

                    if let Some(v) = x.downcast_ref::<Vec<String>>() {
                        let mut sorted = v.clone();
                        sorted.sort_unstable();
                        return Ok(Box::new(sorted));
                    }

                    debug!("AnySorter::copy_sort: unsupported value {:?}", (*x).type_id());
                    Err(Error::UnsupportedType)
                }

                /// Scratch buffer length held for element type `T`, `None` if `T` is unsupported.
                pub fn capacity<T: 'static>(&self) -> Option<usize> {
                    $(
                        if TypeId::of::<T>() == TypeId::of::<$t>() {
                            return Some(self.[<sorter_ $t>].capacity());
                        }
                    )*

                    None
                }
            }
        }
    };
}

with_element_types!(any_sorter);
