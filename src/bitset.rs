//! Fixed-width bit strings for saturation rows.
//!
//! A saturation row records, for one generator, which constraints it does
//! *not* saturate. The width is fixed at allocation time to the number of
//! constraint rows, so out-of-range accesses are programming errors.

/// A fixed-width bit string backed by a vector of u64 words.
///
/// Bit `i` lives in word `i / 64` at position `i % 64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
    /// Width in bits
    nbits: usize,
    /// Number of set bits (cached for O(1) len())
    count: usize,
}

impl BitSet {
    /// Number of bits per word.
    pub const BITS_PER_WORD: usize = 64;

    /// Number of words needed to hold `nbits` bits.
    pub const fn words_for(nbits: usize) -> usize {
        nbits.div_ceil(Self::BITS_PER_WORD)
    }

    /// Creates a bit string of the given width with all bits cleared.
    pub fn new(nbits: usize) -> Self {
        Self {
            words: vec![0; Self::words_for(nbits)],
            nbits,
            count: 0,
        }
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the width in bits.
    #[inline]
    pub fn nbits(&self) -> usize {
        self.nbits
    }

    /// Returns the number of backing words.
    #[inline]
    pub fn nbwords(&self) -> usize {
        self.words.len()
    }

    /// Raw access to the backing words.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    #[inline]
    fn word_and_bit(&self, index: usize) -> (usize, usize) {
        assert!(
            index < self.nbits,
            "Bit index {} out of range for width {}",
            index,
            self.nbits
        );
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    /// Returns true if the bit at the given index is set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        let (word_idx, bit_idx) = self.word_and_bit(index);
        (self.words[word_idx] >> bit_idx) & 1 != 0
    }

    /// Sets the bit at the given index. Returns true if the bit was not previously set.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        let (word_idx, bit_idx) = self.word_and_bit(index);
        let mask = 1u64 << bit_idx;
        let was_clear = self.words[word_idx] & mask == 0;
        if was_clear {
            self.words[word_idx] |= mask;
            self.count += 1;
        }
        was_clear
    }

    /// Clears the bit at the given index. Returns true if the bit was previously set.
    #[inline]
    pub fn remove(&mut self, index: usize) -> bool {
        let (word_idx, bit_idx) = self.word_and_bit(index);
        let mask = 1u64 << bit_idx;
        let was_set = self.words[word_idx] & mask != 0;
        if was_set {
            self.words[word_idx] &= !mask;
            self.count -= 1;
        }
        was_set
    }

    /// Sets or clears the bit at the given index.
    pub fn set(&mut self, index: usize, value: bool) {
        if value {
            self.insert(index);
        } else {
            self.remove(index);
        }
    }

    /// Clears all bits.
    pub fn clear(&mut self) {
        self.words.fill(0);
        self.count = 0;
    }

    /// Returns an iterator over all set bit indices, in increasing order.
    pub fn iter(&self) -> BitSetIter<'_> {
        BitSetIter {
            bitset: self,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over set bits in a BitSet.
pub struct BitSetIter<'a> {
    bitset: &'a BitSet,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(self.word_idx * BitSet::BITS_PER_WORD + bit_idx);
            }

            self.word_idx += 1;
            if self.word_idx >= self.bitset.words.len() {
                return None;
            }
            self.current_word = self.bitset.words[self.word_idx];
        }
    }
}
