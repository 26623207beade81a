use rand::Rng;
use std::sync::Arc;

/// Shared, immutable symbol alphabet.
/// Use Arc to share one instance across all genomes in a population.
#[derive(Debug, Clone)]
pub struct Alphabet {
    /// Symbols in index order
    symbols: Arc<[char]>,
    /// Mapping from symbol to index for fast membership tests
    symbol_to_index: Arc<std::collections::HashMap<char, usize>>,
}

impl Alphabet {
    /// Create a new alphabet from symbols.
    /// The order determines the index mapping.
    pub fn new(symbols: impl Into<Vec<char>>) -> Self {
        let symbols: Vec<char> = symbols.into();
        let symbol_to_index = symbols
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i))
            .collect();

        Self {
            symbols: symbols.into(),
            symbol_to_index: Arc::new(symbol_to_index),
        }
    }

    /// Build an alphabet from the characters of a string, in order.
    pub fn from_symbols(s: &str) -> Self {
        Self::new(s.chars().collect::<Vec<char>>())
    }

    /// Lowercase ASCII letters plus the space character.
    ///
    /// The default symbol set for evolving English-like text.
    pub fn lowercase_with_space() -> Self {
        let mut symbols: Vec<char> = (b'a'..=b'z').map(|b| b as char).collect();
        symbols.push(' ');
        Self::new(symbols)
    }

    /// Get the number of symbols in this alphabet
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if empty
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get symbol by index
    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Get index by symbol
    #[inline]
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.symbol_to_index.get(&c).copied()
    }

    /// Get all symbols as slice
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Check if symbol is in alphabet
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.symbol_to_index.contains_key(&c)
    }

    /// Draw one symbol uniformly at random.
    ///
    /// # Panics
    /// Panics if the alphabet is empty. Configuration validation rejects
    /// empty alphabets before any drawing happens.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.symbols[rng.random_range(0..self.symbols.len())]
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        // Fast path: check if they point to the same Arc
        Arc::ptr_eq(&self.symbols, &other.symbols)
            || self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}
