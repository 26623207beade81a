//! Population management.
//!
//! A population is an ordered collection of genomes paired element-for-element
//! with two parallel arrays: per-individual fitness and niche assignments.

use crate::base::Genome;

/// A population of genomes with index-aligned fitness and niche arrays.
///
/// Invariant: the three collections always have the same length and stay
/// index-aligned. Every structural operation moves all three in lockstep.
#[derive(Debug, Clone)]
pub struct Population {
    genomes: Vec<Genome>,
    fitness: Vec<usize>,
    niches: Vec<usize>,
}

impl Population {
    /// Create a population from pre-scored parallel arrays.
    pub fn new(genomes: Vec<Genome>, fitness: Vec<usize>, niches: Vec<usize>) -> Self {
        debug_assert_eq!(genomes.len(), fitness.len());
        debug_assert_eq!(genomes.len(), niches.len());
        Self {
            genomes,
            fitness,
            niches,
        }
    }

    /// Create an empty population.
    pub fn empty() -> Self {
        Self {
            genomes: Vec::new(),
            fitness: Vec::new(),
            niches: Vec::new(),
        }
    }

    /// Number of individuals.
    #[inline]
    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    /// Check if the population is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    /// All genomes, in population order.
    #[inline]
    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    /// The parallel fitness array.
    #[inline]
    pub fn fitness(&self) -> &[usize] {
        &self.fitness
    }

    /// The parallel niche array.
    #[inline]
    pub fn niches(&self) -> &[usize] {
        &self.niches
    }

    /// One individual's `(genome, fitness, niche)` triple.
    pub fn get(&self, index: usize) -> Option<(&Genome, usize, usize)> {
        let genome = self.genomes.get(index)?;
        Some((genome, self.fitness[index], self.niches[index]))
    }

    /// Mean fitness, `0.0` for an empty population.
    pub fn average_fitness(&self) -> f64 {
        if self.fitness.is_empty() {
            return 0.0;
        }
        self.fitness.iter().sum::<usize>() as f64 / self.fitness.len() as f64
    }

    /// The first individual with maximal fitness, as `(fitness, genome, niche)`.
    pub fn best(&self) -> Option<(usize, &Genome, usize)> {
        if self.fitness.is_empty() {
            return None;
        }
        let mut index = 0;
        for (i, &fitness) in self.fitness.iter().enumerate().skip(1) {
            if fitness > self.fitness[index] {
                index = i;
            }
        }
        Some((self.fitness[index], &self.genomes[index], self.niches[index]))
    }

    /// Append a brood of scored offspring to all three arrays at once.
    pub fn extend(&mut self, genomes: Vec<Genome>, fitness: Vec<usize>, niches: Vec<usize>) {
        debug_assert_eq!(genomes.len(), fitness.len());
        debug_assert_eq!(genomes.len(), niches.len());
        self.genomes.extend(genomes);
        self.fitness.extend(fitness);
        self.niches.extend(niches);
    }

    /// Materialize the individuals whose `keep` flag is set, preserving order.
    ///
    /// `keep` must be index-aligned with the population.
    pub fn retain_mask(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.genomes.len());

        let survivors = keep.iter().filter(|&&k| k).count();
        let mut genomes = Vec::with_capacity(survivors);
        let mut fitness = Vec::with_capacity(survivors);
        let mut niches = Vec::with_capacity(survivors);

        for (i, &k) in keep.iter().enumerate() {
            if k {
                genomes.push(self.genomes[i].clone());
                fitness.push(self.fitness[i]);
                niches.push(self.niches[i]);
            }
        }

        self.genomes = genomes;
        self.fitness = fitness;
        self.niches = niches;
    }

    /// Clone the niche array for a generation snapshot.
    pub fn snapshot_niches(&self) -> Vec<usize> {
        self.niches.clone()
    }
}
