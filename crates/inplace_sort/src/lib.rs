mod buffer;
mod comparator;
mod error;
mod insertion_sort;
mod reverse_bits;
mod weak_heap_sort;

use std::cmp::Ordering;

pub use comparator::{default_compare, default_comparator, ordering_code};
pub use error::SortError;
pub use insertion_sort::{insertion_sort, insertion_sort_by, insertion_sort_by_key};
pub use weak_heap_sort::{weak_heap_sort, weak_heap_sort_by, weak_heap_sort_by_key};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    WeakHeapSort,
    Adaptive,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 3] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::WeakHeapSort,
    SortAlgorithm::Adaptive,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::WeakHeapSort => "weak_heap_sort",
        SortAlgorithm::Adaptive => "adaptive",
    }
}

/// Whether `algo` keeps equal elements in input order for every length.
pub fn is_stable(algo: SortAlgorithm) -> bool {
    matches!(algo, SortAlgorithm::InsertionSort)
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    /// Longest slice `sort_by` hands to insertion sort.
    pub insertion_threshold: usize,
    pub bits_per_word: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 256,
    bits_per_word: u32::BITS as usize,
};

/// Sorts `v` in ascending `PartialOrd` order, see [`sort_by`].
pub fn sort<T: Copy + PartialOrd>(v: &mut [T]) -> Result<&mut [T], SortError> {
    sort_by(v, default_compare)
}

/// Sorts `v` by a key, see [`sort_by`].
pub fn sort_by_key<T, K, F>(v: &mut [T], mut key: F) -> Result<&mut [T], SortError>
where
    T: Copy,
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by(v, |a, b| key(a).cmp(&key(b)))
}

/// Sorts `v` with insertion sort up to `TUNED_PARAMS.insertion_threshold`
/// elements and with weak-heap sort beyond that.
///
/// Only the insertion sort path is stable.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> Result<&mut [T], SortError>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return Ok(v);
    }
    if len == 2 {
        if compare(&v[1], &v[0]) == Ordering::Less {
            v.swap(0, 1);
        }
        return Ok(v);
    }
    if len <= TUNED_PARAMS.insertion_threshold {
        return Ok(insertion_sort_by(v, compare));
    }
    weak_heap_sort_by(v, compare)
}

pub fn sort_with<T, F>(algo: SortAlgorithm, v: &mut [T], compare: F) -> Result<&mut [T], SortError>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    match algo {
        SortAlgorithm::InsertionSort => Ok(insertion_sort_by(v, compare)),
        SortAlgorithm::WeakHeapSort => weak_heap_sort_by(v, compare),
        SortAlgorithm::Adaptive => sort_by(v, compare),
    }
}
