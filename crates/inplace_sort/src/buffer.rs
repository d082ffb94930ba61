use std::marker::PhantomData;
use std::ptr::NonNull;

/// Unchecked by-value access to the slots of a borrowed slice.
///
/// Every element load and store the sorting routines perform goes through
/// `read`/`write`; nothing else in the crate indexes the sequence.
pub(crate) struct RawBuffer<'a, T: Copy> {
    ptr: NonNull<T>,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

impl<'a, T: Copy> RawBuffer<'a, T> {
    #[inline]
    pub(crate) fn new(v: &'a mut [T]) -> Self {
        let len = v.len();
        Self {
            ptr: NonNull::from(v).cast::<T>(),
            len,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[inline(always)]
    pub(crate) unsafe fn read(&self, index: usize) -> T {
        debug_assert!(index < self.len);
        unsafe { *self.ptr.as_ptr().add(index) }
    }

    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[inline(always)]
    pub(crate) unsafe fn write(&mut self, index: usize, value: T) {
        debug_assert!(index < self.len);
        unsafe {
            *self.ptr.as_ptr().add(index) = value;
        }
    }

    /// Exchanges the elements at `a` and `b`.
    ///
    /// # Safety
    ///
    /// Both indices must be less than `self.len()`.
    #[inline(always)]
    pub(crate) unsafe fn exchange(&mut self, a: usize, b: usize) {
        unsafe {
            let x = self.read(a);
            let y = self.read(b);
            self.write(a, y);
            self.write(b, x);
        }
    }

    /// Gives the borrow back as a slice, for chaining.
    #[inline]
    pub(crate) fn into_slice(self) -> &'a mut [T] {
        // SAFETY: `ptr` and `len` came from the `&'a mut [T]` this value consumed.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}
