use std::fmt;

use crate::error::AllocError;

const WORD_BITS: usize = 64;

/// Dense membership set over the integers `[0, capacity)`, packed into
/// 64-bit words. The capacity is fixed at construction; elements at or
/// beyond it are silently ignored by mutation and always absent for
/// queries.
#[derive(Clone)]
pub struct BitSet {
    words: Vec<u64>,
    capacity: usize,
}

impl BitSet {
    /// Creates an empty set over the universe `[0, capacity)`.
    ///
    /// # Errors
    /// Returns [`AllocError`] when storage for the words cannot be
    /// obtained.
    pub fn new(capacity: usize) -> Result<Self, AllocError> {
        let words = alloc_words(capacity.div_ceil(WORD_BITS), capacity)?;
        Ok(Self { words, capacity })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of members currently in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Adds `element`, returning whether it was newly inserted.
    /// Out-of-range elements are ignored and return `false`.
    pub fn insert(&mut self, element: usize) -> bool {
        if element >= self.capacity {
            return false;
        }
        let word_index = element / WORD_BITS;
        let mask = 1u64 << (element % WORD_BITS);
        let already_present = (self.words[word_index] & mask) != 0;
        self.words[word_index] |= mask;
        !already_present
    }

    /// Adds every element in order, each under the same out-of-range
    /// policy as [`insert`](Self::insert).
    pub fn insert_many(&mut self, elements: impl IntoIterator<Item = usize>) {
        for element in elements {
            self.insert(element);
        }
    }

    /// Removes `element`, returning whether it was present.
    /// Out-of-range elements are ignored and return `false`.
    pub fn remove(&mut self, element: usize) -> bool {
        if element >= self.capacity {
            return false;
        }
        let word_index = element / WORD_BITS;
        let mask = 1u64 << (element % WORD_BITS);
        let was_present = (self.words[word_index] & mask) != 0;
        self.words[word_index] &= !mask;
        was_present
    }

    /// Removes every member; the capacity is unchanged.
    pub fn clear(&mut self) {
        for word in &mut self.words {
            *word = 0;
        }
    }

    #[must_use]
    pub fn contains(&self, element: usize) -> bool {
        if element >= self.capacity {
            return false;
        }
        let word_index = element / WORD_BITS;
        let mask = 1u64 << (element % WORD_BITS);
        (self.words[word_index] & mask) != 0
    }

    /// Renders the members in ascending order as `{1, 3, 5}` and hands
    /// the text to `sink`. The set performs no I/O of its own.
    pub fn print(&self, mut sink: impl FnMut(&str)) {
        sink(&self.to_string());
    }

    /// Iterates over the members in ascending order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: &self.words,
            word_index: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Whether every member of `self` is a member of `other`. The
    /// operands' capacities may differ.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.words
            .iter()
            .enumerate()
            .all(|(i, &word)| (word & !other.word_or_zero(i)) == 0)
    }

    #[must_use]
    pub fn is_strict_subset(&self, other: &Self) -> bool {
        self.is_subset(other) && self != other
    }

    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns a new set holding every member of either operand, with
    /// capacity `max(self.capacity, other.capacity)`.
    ///
    /// # Errors
    /// Returns [`AllocError`] when the result cannot be allocated.
    pub fn union(&self, other: &Self) -> Result<Self, AllocError> {
        self.combine(other, |a, b| a | b)
    }

    /// Returns a new set holding the members common to both operands,
    /// with capacity `max(self.capacity, other.capacity)`.
    ///
    /// # Errors
    /// Returns [`AllocError`] when the result cannot be allocated.
    pub fn intersection(&self, other: &Self) -> Result<Self, AllocError> {
        self.combine(other, |a, b| a & b)
    }

    /// Returns a new set holding the members of `self` that are not in
    /// `other`, with capacity `max(self.capacity, other.capacity)`.
    ///
    /// # Errors
    /// Returns [`AllocError`] when the result cannot be allocated.
    pub fn difference(&self, other: &Self) -> Result<Self, AllocError> {
        self.combine(other, |a, b| a & !b)
    }

    /// Returns a new set holding the members of exactly one operand,
    /// with capacity `max(self.capacity, other.capacity)`.
    ///
    /// # Errors
    /// Returns [`AllocError`] when the result cannot be allocated.
    pub fn symmetric_difference(&self, other: &Self) -> Result<Self, AllocError> {
        self.combine(other, |a, b| a ^ b)
    }

    /// Returns a new set holding every non-member of `self`, relative
    /// to `self`'s own capacity.
    ///
    /// # Errors
    /// Returns [`AllocError`] when the result cannot be allocated.
    pub fn complement(&self) -> Result<Self, AllocError> {
        let mut words = alloc_words(self.words.len(), self.capacity)?;
        for (word, &source) in words.iter_mut().zip(&self.words) {
            *word = !source;
        }
        let mut result = Self {
            words,
            capacity: self.capacity,
        };
        result.clear_padding();
        Ok(result)
    }

    fn combine(&self, other: &Self, op: impl Fn(u64, u64) -> u64) -> Result<Self, AllocError> {
        let capacity = self.capacity.max(other.capacity);
        let mut words = alloc_words(capacity.div_ceil(WORD_BITS), capacity)?;
        for (i, word) in words.iter_mut().enumerate() {
            *word = op(self.word_or_zero(i), other.word_or_zero(i));
        }
        let mut result = Self { words, capacity };
        result.clear_padding();
        Ok(result)
    }

    fn word_or_zero(&self, index: usize) -> u64 {
        self.words.get(index).copied().unwrap_or(0)
    }

    // Bits at positions >= capacity in the last word must never be set;
    // equality and len depend on it.
    fn clear_padding(&mut self) {
        let used = self.capacity % WORD_BITS;
        if used != 0
            && let Some(last) = self.words.last_mut()
        {
            *last &= (1u64 << used) - 1;
        }
    }
}

fn alloc_words(len: usize, capacity: usize) -> Result<Vec<u64>, AllocError> {
    let mut words = Vec::new();
    words
        .try_reserve_exact(len)
        .map_err(|source| AllocError { capacity, source })?;
    words.resize(len, 0);
    Ok(words)
}

/// Equality is over the logical member sets: two sets with different
/// capacities compare equal when they hold the same members.
impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        let common = self.words.len().min(other.words.len());
        self.words[..common] == other.words[..common]
            && self.words[common..].iter().all(|&word| word == 0)
            && other.words[common..].iter().all(|&word| word == 0)
    }
}

impl Eq for BitSet {}

impl Extend<usize> for BitSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        self.insert_many(iter);
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over member indices in ascending order, produced by
/// [`BitSet::iter`].
pub struct Iter<'a> {
    words: &'a [u64],
    word_index: usize,
    current_word: u64,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current_word != 0 {
                let bit_index = self.current_word.trailing_zeros() as usize;
                // Clear the lowest set bit.
                self.current_word &= self.current_word - 1;
                return Some(self.word_index * WORD_BITS + bit_index);
            }
            self.word_index += 1;
            if self.word_index >= self.words.len() {
                return None;
            }
            self.current_word = self.words[self.word_index];
        }
    }
}
