use super::Alphabet;
use crate::base::errors::InvalidGenome;
use std::fmt;
use std::sync::Arc;

/// Immutable genome of one simulated organism.
///
/// A genome is a fixed-length sequence of symbols drawn from an `Alphabet`.
/// It is never edited in place: crossover and mutation build a fresh symbol
/// buffer and freeze it into a new `Genome`.
#[derive(Debug, Clone)]
pub struct Genome {
    /// Shared immutable symbols
    symbols: Arc<[char]>,
    /// Shared reference to alphabet
    alphabet: Alphabet,
}

impl Genome {
    /// Create from a symbol buffer without validating membership.
    ///
    /// Used by the generator and the mating engine, which only ever draw
    /// symbols from `alphabet`.
    pub fn from_symbols(symbols: Vec<char>, alphabet: Alphabet) -> Self {
        Self {
            symbols: symbols.into(),
            alphabet,
        }
    }

    /// Create from a string, validating every symbol against the alphabet.
    pub fn from_str(s: &str, alphabet: Alphabet) -> Result<Self, InvalidGenome> {
        let symbols: Result<Vec<char>, _> = s
            .chars()
            .map(|c| {
                if alphabet.contains(c) {
                    Ok(c)
                } else {
                    Err(InvalidGenome::InvalidSymbol(c))
                }
            })
            .collect();

        Ok(Self {
            symbols: symbols?.into(),
            alphabet,
        })
    }

    /// Get length
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if empty
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get symbol at position
    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Get all symbols as slice
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Get alphabet
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Copy the symbols into a fresh mutable buffer.
    pub fn to_vec(&self) -> Vec<char> {
        self.symbols.to_vec()
    }

    /// Symbol-wise comparison against an arbitrary window of symbols.
    #[inline]
    pub fn matches_window(&self, window: &[char]) -> bool {
        self.symbols.as_ref() == window
    }
}

impl PartialEq for Genome {
    fn eq(&self, other: &Self) -> bool {
        // Fast path: check if same Arc
        Arc::ptr_eq(&self.symbols, &other.symbols)
            || self.symbols == other.symbols
    }
}

impl Eq for Genome {}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in self.symbols.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
