//! Initial population generation.

use crate::base::{Alphabet, Genome};
use rand::Rng;

/// Generate `population_size` independent random genomes.
///
/// Every genome is `genome_length` symbols drawn uniformly at random from the
/// alphabet, with replacement. The only side effect is RNG consumption.
/// Configuration validation guarantees a positive length and size and a
/// non-empty alphabet before this is called.
pub fn generate_initial_population<R: Rng + ?Sized>(
    genome_length: usize,
    population_size: usize,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Vec<Genome> {
    let mut population = Vec::with_capacity(population_size);

    for _ in 0..population_size {
        let mut symbols = Vec::with_capacity(genome_length);
        for _ in 0..genome_length {
            symbols.push(alphabet.sample(rng));
        }
        population.push(Genome::from_symbols(symbols, alphabet.clone()));
    }

    population
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_generate_initial_population_counts() {
        let alphabet = Alphabet::from_symbols("abc");
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let population = generate_initial_population(30, 100, &alphabet, &mut rng);
        assert_eq!(population.len(), 100);
    }

    #[test]
    fn test_generate_initial_population_genome_properties() {
        let alphabet = Alphabet::lowercase_with_space();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
        let population = generate_initial_population(12, 50, &alphabet, &mut rng);

        for genome in &population {
            assert_eq!(genome.len(), 12);
            assert!(genome.symbols().iter().all(|&c| alphabet.contains(c)));
        }
    }

    #[test]
    fn test_generate_initial_population_single_symbol_alphabet() {
        let alphabet = Alphabet::from_symbols("a");
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let population = generate_initial_population(4, 3, &alphabet, &mut rng);

        for genome in &population {
            assert_eq!(genome.to_string(), "aaaa");
        }
    }

    #[test]
    fn test_generate_initial_population_deterministic() {
        let alphabet = Alphabet::from_symbols("abc");
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(9);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(9);

        let pop1 = generate_initial_population(8, 20, &alphabet, &mut rng1);
        let pop2 = generate_initial_population(8, 20, &alphabet, &mut rng2);

        assert_eq!(pop1, pop2);
    }
}
