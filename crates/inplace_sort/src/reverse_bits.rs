use crate::{SortError, TUNED_PARAMS};

/// One reverse flag per heap node, packed into `u32` words.
///
/// The words are owned by a `Vec`, so they are released when the value is
/// dropped, including during unwinding out of a comparator.
#[derive(Debug)]
pub(crate) struct ReverseBits {
    words: Vec<u32>,
}

impl ReverseBits {
    /// Reserves zeroed storage for `len` flags.
    pub(crate) fn try_new(len: usize) -> Result<Self, SortError> {
        let words = word_count(len);
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(words)
            .map_err(|source| SortError::AllocationFailure { words, source })?;
        storage.resize(words, 0);
        Ok(Self { words: storage })
    }

    #[inline(always)]
    pub(crate) fn get(&self, index: usize) -> bool {
        let (word, mask) = locate(index);
        self.words[word] & mask != 0
    }

    #[inline(always)]
    pub(crate) fn toggle(&mut self, index: usize) {
        let (word, mask) = locate(index);
        self.words[word] ^= mask;
    }

    /// `get` as `0` or `1`, for child index arithmetic.
    #[inline(always)]
    pub(crate) fn bit(&self, index: usize) -> usize {
        self.get(index) as usize
    }

    pub(crate) fn word_len(&self) -> usize {
        self.words.len()
    }
}

#[inline(always)]
pub(crate) fn word_count(len: usize) -> usize {
    len.div_ceil(TUNED_PARAMS.bits_per_word)
}

#[inline(always)]
fn locate(index: usize) -> (usize, u32) {
    let bits = TUNED_PARAMS.bits_per_word;
    (index / bits, 1 << (index % bits))
}
