use lsd_sort::RadixSortable;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: RadixSortable;
}

pub mod patterns;
