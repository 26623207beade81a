//! Fitness and niche computation.
//!
//! A genome is scored against every sliding window of the ecosystem with the
//! Levenshtein edit distance. Its fitness is `genome_length - distance` to
//! the best-matching window, and that window's start index is its niche.

use crate::base::{Ecosystem, Genome};

/// Levenshtein edit distance between two symbol slices.
///
/// Standard two-row dynamic programming; O(|a| * |b|) time, O(|b|) space.
pub fn edit_distance(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Scores genomes against the windows of an ecosystem.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    ecosystem: Ecosystem,
    genome_length: usize,
}

impl FitnessEvaluator {
    /// Create a new evaluator.
    ///
    /// Callers must ensure `genome_length <= ecosystem.len()`; configuration
    /// validation enforces this before a run starts.
    pub fn new(ecosystem: Ecosystem, genome_length: usize) -> Self {
        Self {
            ecosystem,
            genome_length,
        }
    }

    /// Get the ecosystem.
    #[inline]
    pub fn ecosystem(&self) -> &Ecosystem {
        &self.ecosystem
    }

    /// Get the genome length being scored.
    #[inline]
    pub fn genome_length(&self) -> usize {
        self.genome_length
    }

    /// Number of niches, i.e. ecosystem windows.
    #[inline]
    pub fn niche_count(&self) -> usize {
        self.ecosystem.window_count(self.genome_length)
    }

    /// Best `(fitness, niche)` pair for one genome.
    ///
    /// Fitness is `genome_length - edit_distance` against each window, in the
    /// range `[0, genome_length]`; `genome_length` denotes a perfect match.
    /// The running maximum only updates on strict improvement, so a tie goes
    /// to the first (lowest-index) window.
    pub fn individual_fitness(&self, genome: &Genome) -> (usize, usize) {
        let mut max_fitness = 0;
        let mut niche = 0;

        for w in 0..self.niche_count() {
            let window = self.ecosystem.window(w, self.genome_length);
            let distance = edit_distance(genome.symbols(), window);
            let fitness = self.genome_length - distance;
            if fitness > max_fitness {
                max_fitness = fitness;
                niche = w;
            }
        }

        (max_fitness, niche)
    }

    /// Score every genome, preserving input order.
    ///
    /// Returns the parallel fitness and niche arrays.
    pub fn global_fitness(&self, genomes: &[Genome]) -> (Vec<usize>, Vec<usize>) {
        let mut fitness = Vec::with_capacity(genomes.len());
        let mut niches = Vec::with_capacity(genomes.len());

        for genome in genomes {
            let (f, n) = self.individual_fitness(genome);
            fitness.push(f);
            niches.push(n);
        }

        (fitness, niches)
    }
}
