use std::cmp::Ordering;

/// Orders two values by their `PartialOrd` relations.
///
/// `Greater` if `a > b`, `Less` if `a < b`, and `Equal` otherwise. Values with
/// no defined order between them (e.g. `NaN`) collapse to `Equal`.
#[inline(always)]
pub fn default_compare<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    if a > b {
        Ordering::Greater
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Returns `default_compare` for `T` as a plain function pointer.
#[inline]
pub fn default_comparator<T: PartialOrd>() -> fn(&T, &T) -> Ordering {
    default_compare::<T>
}

/// Signed code of an ordering: `-1`, `0` or `1`.
#[inline(always)]
pub fn ordering_code(ord: Ordering) -> i32 {
    ord as i32
}
