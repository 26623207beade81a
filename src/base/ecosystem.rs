use std::fmt;
use std::sync::Arc;

/// Immutable reference sequence that genomes are scored against.
///
/// The ecosystem is read-only for the lifetime of a simulation run. Genomes
/// compete for sliding windows of it; the window index a genome best matches
/// is its niche. The ecosystem is not restricted to the genome alphabet, so
/// an alphabet disjoint from the ecosystem symbols is a legal (if hopeless)
/// configuration.
#[derive(Debug, Clone)]
pub struct Ecosystem {
    /// Shared immutable symbols
    symbols: Arc<[char]>,
}

impl Ecosystem {
    /// Create from a reference string.
    pub fn from_str(s: &str) -> Self {
        Self {
            symbols: s.chars().collect::<Vec<char>>().into(),
        }
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

    /// Get all symbols as slice
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of length-`genome_length` windows, i.e. the number of niches.
    ///
    /// Callers must ensure `genome_length <= self.len()`; configuration
    /// validation enforces this before a run starts.
    #[inline]
    pub fn window_count(&self, genome_length: usize) -> usize {
        self.symbols.len() - genome_length + 1
    }

    /// The window of `genome_length` symbols starting at `start`.
    #[inline]
    pub fn window(&self, start: usize, genome_length: usize) -> &[char] {
        &self.symbols[start..start + genome_length]
    }
}

impl PartialEq for Ecosystem {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.symbols, &other.symbols) || self.symbols == other.symbols
    }
}

impl Eq for Ecosystem {}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in self.symbols.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecosystem_from_str() {
        let eco = Ecosystem::from_str("abcabc");
        assert_eq!(eco.len(), 6);
        assert_eq!(eco.to_string(), "abcabc");
    }

    #[test]
    fn test_ecosystem_window_count() {
        let eco = Ecosystem::from_str("abcabc");
        assert_eq!(eco.window_count(3), 4);
        assert_eq!(eco.window_count(6), 1);
        assert_eq!(eco.window_count(1), 6);
    }

    #[test]
    fn test_ecosystem_window() {
        let eco = Ecosystem::from_str("abcabc");
        assert_eq!(eco.window(0, 3), &['a', 'b', 'c']);
        assert_eq!(eco.window(1, 3), &['b', 'c', 'a']);
        assert_eq!(eco.window(3, 3), &['a', 'b', 'c']);
    }

    #[test]
    fn test_ecosystem_equality() {
        let eco1 = Ecosystem::from_str("abc");
        let eco2 = eco1.clone();
        let eco3 = Ecosystem::from_str("abc");
        let eco4 = Ecosystem::from_str("abd");

        assert_eq!(eco1, eco2);
        assert_eq!(eco1, eco3);
        assert_ne!(eco1, eco4);
    }

    #[test]
    fn test_ecosystem_unicode_length_is_chars() {
        let eco = Ecosystem::from_str("αβγ");
        assert_eq!(eco.len(), 3);
        assert_eq!(eco.window(1, 2), &['β', 'γ']);
    }
}
