use crate::element::RadixInt;

const MAX_BITS: u32 = 64;

/// Bit width and minimum value of an integer type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Width<T> {
    /// One of 8, 16, 32 or 64.
    pub bits: u32,
    /// `0` for unsigned types, the two's-complement minimum for signed ones.
    pub min: T,
}

impl<T: RadixInt> Width<T> {
    #[inline]
    pub fn is_signed(&self) -> bool {
        !self.min.is_zero()
    }

    /// Number of byte-sized radix passes needed to cover the whole key.
    #[inline]
    pub fn passes(&self) -> u32 {
        self.bits / 8
    }
}

/// Returns the bit width and minimum value of `T`.
///
/// Derived from the bit patterns of `T` alone. A pattern with every bit but the lowest set is
/// shifted left by half the candidate width until it stops vanishing, and the all-ones pattern
/// tells signed from unsigned.
#[inline]
pub fn detect<T: RadixInt>() -> Width<T> {
    // All bits set except the lowest.
    let fffe = !T::zero() ^ T::one();

    // Shifting by the type's width or more drops every bit.
    let mut bits = MAX_BITS;
    while fffe.checked_shl(bits >> 1).unwrap_or_else(T::zero).is_zero() {
        bits >>= 1;
    }

    if !T::zero() > T::zero() {
        Width { bits, min: T::zero() }
    } else {
        // Only the sign bit survives.
        Width {
            bits,
            min: fffe.wrapping_shl(bits - 2),
        }
    }
}
