//! Niche-constrained mating.
//!
//! Mate selection is panmictic: a random permutation of the whole population
//! is scanned for each mother, and the first other individual sharing her
//! niche becomes the father. Offspring counts are fitness-proportional,
//! normalized by the mean fitness of the population as it stood when mating
//! began.

use crate::base::Genome;
use crate::evolution::{FitnessEvaluator, MutationModel};
use crate::simulation::Population;
use rand::seq::SliceRandom;
use rand::Rng;

/// Scored offspring accumulated during one mating phase.
///
/// Offspring are buffered here and appended to the population in a single
/// extend once every mother has been processed, so the parent arrays are
/// never scanned and grown at the same time.
#[derive(Debug, Default)]
struct Brood {
    genomes: Vec<Genome>,
    fitness: Vec<usize>,
    niches: Vec<usize>,
}

/// Run one mating phase over the population.
///
/// Each mother (iterated in population order) mates at most once, with the
/// first niche-compatible father found in the shuffled panmictic list; a
/// mother with no compatible partner produces no offspring. All offspring
/// are scored before being appended.
pub fn mate<R: Rng + ?Sized>(
    population: &mut Population,
    evaluator: &FitnessEvaluator,
    mutation: &MutationModel,
    rng: &mut R,
) {
    if population.is_empty() {
        return;
    }

    // The normalizer is the mean fitness at the moment mating begins; it is
    // deliberately not recomputed per pair.
    let average_fitness = population.average_fitness();
    let parent_count = population.len();

    let mut panmictic_list: Vec<usize> = (0..parent_count).collect();
    panmictic_list.shuffle(rng);

    let mut brood = Brood::default();

    for mother in 0..parent_count {
        for &father in &panmictic_list {
            if father != mother && population.niches()[father] == population.niches()[mother] {
                offsprings(
                    mother,
                    father,
                    population,
                    average_fitness,
                    evaluator,
                    mutation,
                    &mut brood,
                    rng,
                );
                break;
            }
        }
    }

    population.extend(brood.genomes, brood.fitness, brood.niches);
}

/// Produce the scored brood of one `(mother, father)` pair.
///
/// One crossover point is shared by all offspring of the pair. The offspring
/// count is `floor(fitness[m] * fitness[f] / (2 * average_fitness))`; a zero
/// average fitness yields zero offspring rather than a division fault.
#[allow(clippy::too_many_arguments)]
fn offsprings<R: Rng + ?Sized>(
    mother: usize,
    father: usize,
    population: &Population,
    average_fitness: f64,
    evaluator: &FitnessEvaluator,
    mutation: &MutationModel,
    brood: &mut Brood,
    rng: &mut R,
) {
    let genome_length = evaluator.genome_length();
    let cross = rng.random_range(0..genome_length);

    let num_offsprings = if average_fitness == 0.0 {
        0
    } else {
        let mother_fitness = population.fitness()[mother] as f64;
        let father_fitness = population.fitness()[father] as f64;
        (mother_fitness * father_fitness / (2.0 * average_fitness)) as usize
    };

    let mother_genome = &population.genomes()[mother];
    let father_genome = &population.genomes()[father];
    let alphabet = mother_genome.alphabet().clone();

    for _ in 0..num_offsprings {
        let mut offspring = Vec::with_capacity(genome_length);
        offspring.extend_from_slice(&mother_genome.symbols()[..cross]);
        offspring.extend_from_slice(&father_genome.symbols()[cross..]);

        mutation.mutate(&mut offspring, rng);

        let genome = Genome::from_symbols(offspring, alphabet.clone());
        let (fitness, niche) = evaluator.individual_fitness(&genome);

        brood.genomes.push(genome);
        brood.fitness.push(fitness);
        brood.niches.push(niche);
    }
}
