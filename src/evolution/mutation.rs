//! Mutation operators for offspring genomes.
//!
//! Two operators act on the crossover product of a mating pair:
//! - **Substitution** (applied to every offspring): one uniformly chosen
//!   locus is replaced with a uniformly random alphabet symbol.
//! - **Indel** (applied with probability 1/11): a random symbol is inserted
//!   at one locus and the symbol at an independently drawn locus of the
//!   grown buffer is deleted, leaving the length unchanged.

use crate::base::Alphabet;
use rand::Rng;

/// Largest value of the indel trigger die; a draw from `0..=INDEL_DIE_MAX`
/// triggers the indel only on the single maximal face.
const INDEL_DIE_MAX: u32 = 10;

/// Mutation operator set sharing one alphabet.
#[derive(Debug, Clone)]
pub struct MutationModel {
    alphabet: Alphabet,
}

impl MutationModel {
    /// Create a new mutation model over the given alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// Get the alphabet.
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Apply both operators to an offspring buffer: substitution always,
    /// indel on a 1-in-11 draw.
    pub fn mutate<R: Rng + ?Sized>(&self, offspring: &mut Vec<char>, rng: &mut R) {
        self.substitute(offspring, rng);
        if rng.random_range(0..=INDEL_DIE_MAX) > INDEL_DIE_MAX - 1 {
            self.indel(offspring, rng);
        }
    }

    /// Replace one uniformly chosen symbol with a random alphabet symbol.
    ///
    /// The replacement may equal the original symbol.
    pub fn substitute<R: Rng + ?Sized>(&self, offspring: &mut [char], rng: &mut R) {
        let locus = rng.random_range(0..offspring.len());
        offspring[locus] = self.alphabet.sample(rng);
    }

    /// Insert a random symbol at a locus in `[0, L-1]` and delete the symbol
    /// at an independent locus in `[0, L]` of the grown buffer.
    ///
    /// The deletion locus is drawn against the pre-insertion length but
    /// applied after the insertion, matching the coupled draw/apply order of
    /// the offspring production step. Length is preserved for every draw:
    /// `[0, L]` always indexes into the post-insertion buffer of length L+1.
    pub fn indel<R: Rng + ?Sized>(&self, offspring: &mut Vec<char>, rng: &mut R) {
        let genome_length = offspring.len();
        let deletion = rng.random_range(0..=genome_length);
        let insertion = rng.random_range(0..genome_length);
        let symbol = self.alphabet.sample(rng);
        Self::indel_at(offspring, insertion, deletion, symbol);
    }

    /// Deterministic core of the indel operator.
    ///
    /// `insertion` must be in `[0, L-1]` and `deletion` in `[0, L]` for a
    /// buffer of length L.
    pub fn indel_at(offspring: &mut Vec<char>, insertion: usize, deletion: usize, symbol: char) {
        offspring.insert(insertion, symbol);
        offspring.remove(deletion);
    }
}
