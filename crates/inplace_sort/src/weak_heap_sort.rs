//! Weak-heap sort (Dutton, 1993).
//!
//! A weak heap stores the maximum at index 0. Every other node `i` hangs off
//! `i >> 1`, and its reverse bit decides which of its two children is the one
//! that counts for the heap order, so each join costs a single comparison.

use std::cmp::Ordering;

use crate::SortError;
use crate::buffer::RawBuffer;
use crate::comparator::default_compare;
use crate::reverse_bits::ReverseBits;

/// Unstable weak-heap sort in ascending `PartialOrd` order.
pub fn weak_heap_sort<T: Copy + PartialOrd>(v: &mut [T]) -> Result<&mut [T], SortError> {
    weak_heap_sort_by(v, default_compare)
}

/// Unstable weak-heap sort ordering elements by a key.
pub fn weak_heap_sort_by_key<T, K, F>(v: &mut [T], mut key: F) -> Result<&mut [T], SortError>
where
    T: Copy,
    K: Ord,
    F: FnMut(&T) -> K,
{
    weak_heap_sort_by(v, |a, b| key(a).cmp(&key(b)))
}

/// Unstable weak-heap sort with a comparator.
///
/// `O(n log n)` comparisons and one scratch bit per element. The scratch
/// bits are reserved before the slice is touched; if that fails the slice is
/// left as it was. If `compare` panics the slice is left in an unspecified
/// order.
pub fn weak_heap_sort_by<T, F>(v: &mut [T], mut compare: F) -> Result<&mut [T], SortError>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    let mut reverse = match ReverseBits::try_new(len) {
        Ok(bits) => bits,
        Err(err) => {
            log::debug!("weak_heap_sort: cannot reserve reverse bits for len={len}: {err}");
            return Err(err);
        }
    };
    log::trace!(
        "weak_heap_sort: len={len} reverse_words={}",
        reverse.word_len()
    );

    let mut buf = RawBuffer::new(v);
    if len < 2 {
        return Ok(buf.into_slice());
    }

    build(&mut buf, &mut reverse, &mut compare);
    extract(&mut buf, &mut reverse, &mut compare);

    Ok(buf.into_slice())
}

// Joins every node with its distinguished ancestor, bottom-up.
fn build<T, F>(buf: &mut RawBuffer<'_, T>, reverse: &mut ReverseBits, compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    for i in (1..buf.len()).rev() {
        let mut j = i;
        while (j & 1) == reverse.bit(j >> 1) {
            j >>= 1;
        }
        join(buf, reverse, compare, j >> 1, i);
    }
}

// Moves the root to the back of the heap, then sifts the leftmost path of the
// root's real subtree back up to index 0.
fn extract<T, F>(buf: &mut RawBuffer<'_, T>, reverse: &mut ReverseBits, compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    for end in (2..buf.len()).rev() {
        // SAFETY: `end < len`.
        unsafe { buf.exchange(0, end) };

        let mut x = 1;
        loop {
            let y = 2 * x + reverse.bit(x);
            if y >= end {
                break;
            }
            x = y;
        }

        while x > 0 {
            join(buf, reverse, compare, 0, x);
            x >>= 1;
        }
    }

    // The loop leaves the two smallest elements at 0 and 1 with the larger
    // one at the root.
    // SAFETY: `len >= 2`.
    unsafe { buf.exchange(0, 1) };
}

// If the child outranks the ancestor, swap them and flip the child's subtrees.
#[inline(always)]
fn join<T, F>(
    buf: &mut RawBuffer<'_, T>,
    reverse: &mut ReverseBits,
    compare: &mut F,
    ancestor: usize,
    child: usize,
) where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(ancestor < child && child < buf.len());

    // SAFETY: `ancestor < child < len`.
    unsafe {
        let a = buf.read(ancestor);
        let b = buf.read(child);
        if compare(&a, &b) == Ordering::Less {
            reverse.toggle(child);
            buf.write(child, a);
            buf.write(ancestor, b);
        }
    }
}
