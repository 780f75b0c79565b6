use crate::element::RadixSortable;

/// Slice lengths below which a comparison sort beats radix sort.
///
/// Every radix pass touches the whole slice twice and clears a 256 entry histogram, so short
/// slices are faster with `sort_unstable`. The thresholds only affect speed, never the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CutoffPolicy {
    /// Integers up to 32 bits.
    pub int: usize,
    /// 64 bit integers, including pointer-sized ones on 64 bit targets.
    pub int64: usize,
    pub float32: usize,
    pub float64: usize,
}

impl CutoffPolicy {
    pub const DEFAULT_INT: usize = 128;
    pub const DEFAULT_INT64: usize = 256;
    pub const DEFAULT_FLOAT32: usize = 128;
    pub const DEFAULT_FLOAT64: usize = 384;

    pub const DEFAULT: Self = Self {
        int: Self::DEFAULT_INT,
        int64: Self::DEFAULT_INT64,
        float32: Self::DEFAULT_FLOAT32,
        float64: Self::DEFAULT_FLOAT64,
    };

    /// Never falls back to comparison sort. Useful to exercise the radix path on tiny inputs.
    pub const ALWAYS_RADIX: Self = Self {
        int: 0,
        int64: 0,
        float32: 0,
        float64: 0,
    };

    pub const fn with_int(mut self, cutoff: usize) -> Self {
        self.int = cutoff;
        self
    }

    pub const fn with_int64(mut self, cutoff: usize) -> Self {
        self.int64 = cutoff;
        self
    }

    pub const fn with_float32(mut self, cutoff: usize) -> Self {
        self.float32 = cutoff;
        self
    }

    pub const fn with_float64(mut self, cutoff: usize) -> Self {
        self.float64 = cutoff;
        self
    }

    /// Threshold that applies to slices of `T`.
    #[inline]
    pub fn cutoff<T: RadixSortable>(&self) -> usize {
        T::cutoff(self)
    }

    #[inline]
    pub fn should_use_comparison_sort<T: RadixSortable>(&self, len: usize) -> bool {
        len < self.cutoff::<T>()
    }
}

impl Default for CutoffPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
