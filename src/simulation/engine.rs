//! Evolution controller.
//!
//! Orchestrates generations: mating, then selection, then a niche snapshot,
//! until some individual matches an ecosystem window perfectly or the
//! generation budget runs out. The controller owns the population and the
//! snapshot history for the lifetime of a run.

use crate::base::{Alphabet, ConfigError, Ecosystem, Genome};
use crate::evolution::{mate, select, FitnessEvaluator, MutationModel};
use crate::simulation::{
    generate_initial_population, EvolutionConfig, NicheHistory, Population,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Terminal condition of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Some individual matched an ecosystem window exactly at this generation.
    Converged { generation: usize },
    /// The generation budget ran out without a perfect match.
    Exhausted,
}

/// Main evolution controller.
#[derive(Debug)]
pub struct Evolution {
    /// Validated run configuration
    config: EvolutionConfig,
    /// Scorer over the ecosystem windows
    evaluator: FitnessEvaluator,
    /// Substitution + indel operators
    mutation: MutationModel,
    /// Current population with parallel fitness/niche arrays
    population: Population,
    /// Per-generation niche snapshots, generation 0 included
    history: NicheHistory,
    /// Completed generations
    generation: usize,
    /// Random number generator (Xoshiro256++ for reproducible runs)
    rng: Xoshiro256PlusPlus,
}

impl Evolution {
    /// Validate the configuration, then generate and score generation 0.
    ///
    /// # Errors
    /// Returns a `ConfigError` without generating any population if the
    /// configuration is invalid.
    pub fn new(config: EvolutionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = if let Some(seed) = config.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };

        let alphabet = Alphabet::from_symbols(&config.alphabet);
        let ecosystem = Ecosystem::from_str(&config.ecosystem);
        let evaluator = FitnessEvaluator::new(ecosystem, config.genome_length);
        let mutation = MutationModel::new(alphabet.clone());

        let genomes = generate_initial_population(
            config.genome_length,
            config.population_size,
            &alphabet,
            &mut rng,
        );
        let (fitness, niches) = evaluator.global_fitness(&genomes);
        let population = Population::new(genomes, fitness, niches);

        let mut history = NicheHistory::new();
        history.record(population.snapshot_niches());

        Ok(Self {
            config,
            evaluator,
            mutation,
            population,
            history,
            generation: 0,
            rng,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Get the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Get the snapshot history.
    pub fn history(&self) -> &NicheHistory {
        &self.history
    }

    /// Get the ecosystem being inhabited.
    pub fn ecosystem(&self) -> &Ecosystem {
        self.evaluator.ecosystem()
    }

    /// Number of niches, i.e. ecosystem windows.
    pub fn niche_count(&self) -> usize {
        self.evaluator.niche_count()
    }

    /// Completed generations (excluding the initial population).
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The current best `(fitness, genome, niche)`, `None` when empty.
    pub fn best(&self) -> Option<(usize, &Genome, usize)> {
        self.population.best()
    }

    /// Whether some individual currently matches a window perfectly.
    pub fn converged(&self) -> bool {
        self.best()
            .is_some_and(|(fitness, _, _)| fitness == self.config.genome_length)
    }

    /// Advance one generation: mating, selection, snapshot.
    ///
    /// Tolerates degenerate populations: with no individuals (or no
    /// niche-compatible pairs) mating produces nothing and selection is a
    /// no-op, but the snapshot is still recorded.
    pub fn step(&mut self) {
        mate(
            &mut self.population,
            &self.evaluator,
            &self.mutation,
            &mut self.rng,
        );
        select(&mut self.population, self.config.population_size);
        self.history.record(self.population.snapshot_niches());
        self.generation += 1;
    }

    /// Run until convergence or the generation budget is exhausted.
    pub fn run(&mut self) -> Outcome {
        for generation in 0..self.config.generation_limit {
            self.step();
            if self.converged() {
                return Outcome::Converged { generation };
            }
        }
        Outcome::Exhausted
    }

    /// Consume the controller, handing the history to the caller.
    pub fn into_history(self) -> NicheHistory {
        self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> EvolutionConfig {
        EvolutionConfig::new("abcabc", "abc", 50, 3, 20, Some(42))
    }

    #[test]
    fn test_evolution_new_scores_generation_zero() {
        let evo = Evolution::new(small_config()).unwrap();

        assert_eq!(evo.generation(), 0);
        assert_eq!(evo.population().len(), 50);
        assert_eq!(evo.history().len(), 1);
        assert_eq!(evo.history().generation(0).unwrap().len(), 50);
        assert_eq!(evo.niche_count(), 4);

        for (i, &fitness) in evo.population().fitness().iter().enumerate() {
            assert!(fitness <= 3);
            assert!(evo.population().niches()[i] < 4);
        }
    }

    #[test]
    fn test_evolution_new_rejects_invalid_config() {
        let mut config = small_config();
        config.genome_length = 10;
        let err = Evolution::new(config).unwrap_err();
        assert!(matches!(err, ConfigError::EcosystemTooShort { .. }));
    }

    #[test]
    fn test_evolution_step_increments_and_snapshots() {
        let mut evo = Evolution::new(small_config()).unwrap();
        evo.step();

        assert_eq!(evo.generation(), 1);
        assert_eq!(evo.history().len(), 2);
        assert!(evo.population().len() <= 50);
    }

    #[test]
    fn test_evolution_population_bounded_after_selection() {
        let mut evo = Evolution::new(small_config()).unwrap();
        for _ in 0..5 {
            evo.step();
            assert!(evo.population().len() <= 50);
        }
    }

    #[test]
    fn test_evolution_run_converges_on_small_ecosystem() {
        let mut evo = Evolution::new(small_config()).unwrap();
        let outcome = evo.run();

        let Outcome::Converged { generation } = outcome else {
            panic!("expected convergence, got {outcome:?}");
        };
        assert!(generation < 20);

        let (fitness, genome, niche) = evo.best().unwrap();
        assert_eq!(fitness, 3);
        assert!(genome.matches_window(evo.ecosystem().window(niche, 3)));
    }

    #[test]
    fn test_evolution_zero_generation_limit_exhausts_immediately() {
        let mut config = small_config();
        config.generation_limit = 0;
        let mut evo = Evolution::new(config).unwrap();

        assert_eq!(evo.run(), Outcome::Exhausted);
        assert_eq!(evo.generation(), 0);
        assert_eq!(evo.history().len(), 1);
    }

    #[test]
    fn test_evolution_disjoint_alphabet_completes_without_offspring() {
        // Alphabet disjoint from the ecosystem: every fitness is 0, so
        // mating must produce nothing and the population stays intact.
        let config = EvolutionConfig::new("abcabc", "xyz", 10, 3, 3, Some(7));
        let mut evo = Evolution::new(config).unwrap();

        assert_eq!(evo.run(), Outcome::Exhausted);
        assert_eq!(evo.population().len(), 10);
        assert!(evo.population().fitness().iter().all(|&f| f == 0));
        assert_eq!(evo.history().len(), 4);
    }

    #[test]
    fn test_evolution_deterministic_histories() {
        let run = || {
            let mut evo = Evolution::new(small_config()).unwrap();
            let outcome = evo.run();
            (outcome, evo.into_history())
        };

        let (outcome1, history1) = run();
        let (outcome2, history2) = run();

        assert_eq!(outcome1, outcome2);
        assert_eq!(history1.len(), history2.len());
        for g in 0..history1.len() {
            assert_eq!(history1.generation(g), history2.generation(g));
        }
    }

    #[test]
    fn test_evolution_into_history_snapshot_count() {
        let mut config = small_config();
        config.alphabet = "xyz".into(); // Never converges
        config.generation_limit = 5;
        let mut evo = Evolution::new(config).unwrap();
        evo.run();

        let history = evo.into_history();
        assert_eq!(history.len(), 6); // Generation 0 plus 5 steps
    }
}
