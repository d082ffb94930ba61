use std::cmp::Ordering;

use crate::buffer::RawBuffer;
use crate::comparator::default_compare;

/// Stable insertion sort in ascending `PartialOrd` order.
pub fn insertion_sort<T: Copy + PartialOrd>(v: &mut [T]) -> &mut [T] {
    insertion_sort_by(v, default_compare)
}

/// Stable insertion sort ordering elements by a key.
pub fn insertion_sort_by_key<T, K, F>(v: &mut [T], mut key: F) -> &mut [T]
where
    T: Copy,
    K: Ord,
    F: FnMut(&T) -> K,
{
    insertion_sort_by(v, |a, b| key(a).cmp(&key(b)))
}

/// Stable insertion sort with a comparator.
///
/// An element moves left only past elements that compare `Greater`, so equal
/// elements keep their input order. `O(n^2)` worst case, linear on sorted
/// input, no extra memory. If `compare` panics the slice is left partially
/// shifted: one element may be duplicated and another lost.
pub fn insertion_sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut buf = RawBuffer::new(v);
    let len = buf.len();

    // SAFETY: `i < len` and every `hole` lies in `1..=i`, so all accesses are in-bounds.
    unsafe {
        for i in 1..len {
            let key = buf.read(i);
            let mut hole = i;
            while hole > 0 {
                let prev = buf.read(hole - 1);
                if compare(&key, &prev) != Ordering::Less {
                    break;
                }
                buf.write(hole, prev);
                hole -= 1;
            }
            buf.write(hole, key);
        }
    }

    buf.into_slice()
}
