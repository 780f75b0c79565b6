//! Error types for the `lsd_sort` crate

/// Errors reported by the fallible entry points.
///
/// Both variants are raised before the input is touched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The scratch buffer handed to [`crate::try_sort_with_buffer`] is shorter than the slice.
    #[error("scratch buffer too small: buffer has {buffer_len} elements, slice has {len}")]
    BufferTooSmall {
        /// Length of the slice to sort.
        len: usize,
        /// Length of the supplied buffer.
        buffer_len: usize,
    },

    /// The value given to a dynamic entry point is neither a `Vec` of a supported element
    /// type, a `Vec<String>` nor a boxed [`crate::SortInterface`].
    #[error("type not supported")]
    UnsupportedType,
}

pub type Result<T> = core::result::Result<T, Error>;
