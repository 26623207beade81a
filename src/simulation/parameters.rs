//! Simulation configuration.
//!
//! All options are validated before a run starts; a run never begins from an
//! invalid configuration.

use crate::base::ConfigError;
use serde::{Deserialize, Serialize};

/// High-level configuration for one evolutionary run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Reference sequence individuals are scored against
    pub ecosystem: String,
    /// Symbol set used for generation and mutation, one symbol per character
    pub alphabet: String,
    /// Target population after each selection step
    pub population_size: usize,
    /// Fixed length of every genome
    pub genome_length: usize,
    /// Hard cap on simulated generations
    pub generation_limit: usize,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}

impl EvolutionConfig {
    /// Create a new configuration.
    pub fn new(
        ecosystem: impl Into<String>,
        alphabet: impl Into<String>,
        population_size: usize,
        genome_length: usize,
        generation_limit: usize,
        seed: Option<u64>,
    ) -> Self {
        Self {
            ecosystem: ecosystem.into(),
            alphabet: alphabet.into(),
            population_size,
            genome_length,
            generation_limit,
            seed,
        }
    }

    /// Ecosystem length in symbols (not bytes).
    pub fn ecosystem_length(&self) -> usize {
        self.ecosystem.chars().count()
    }

    /// Check all configuration invariants.
    ///
    /// # Errors
    /// Returns the first violated invariant: zero genome length, zero
    /// population size, empty alphabet, or an ecosystem shorter than the
    /// genome length.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.genome_length == 0 {
            return Err(ConfigError::ZeroGenomeLength);
        }
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulationSize);
        }
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        let ecosystem_length = self.ecosystem_length();
        if ecosystem_length < self.genome_length {
            return Err(ConfigError::EcosystemTooShort {
                ecosystem_length,
                genome_length: self.genome_length,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> EvolutionConfig {
        EvolutionConfig::new("abcabc", "abc", 50, 3, 20, Some(42))
    }

    #[test]
    fn test_config_new() {
        let config = valid_config();
        assert_eq!(config.ecosystem, "abcabc");
        assert_eq!(config.alphabet, "abc");
        assert_eq!(config.population_size, 50);
        assert_eq!(config.genome_length, 3);
        assert_eq!(config.generation_limit, 20);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_config_validate_ok() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_config_validate_zero_genome_length() {
        let mut config = valid_config();
        config.genome_length = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroGenomeLength));
    }

    #[test]
    fn test_config_validate_zero_population_size() {
        let mut config = valid_config();
        config.population_size = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroPopulationSize));
    }

    #[test]
    fn test_config_validate_empty_alphabet() {
        let mut config = valid_config();
        config.alphabet = String::new();
        assert_eq!(config.validate(), Err(ConfigError::EmptyAlphabet));
    }

    #[test]
    fn test_config_validate_ecosystem_too_short() {
        let mut config = valid_config();
        config.genome_length = 7;
        assert_eq!(
            config.validate(),
            Err(ConfigError::EcosystemTooShort {
                ecosystem_length: 6,
                genome_length: 7,
            })
        );
    }

    #[test]
    fn test_config_genome_length_equal_to_ecosystem_is_valid() {
        let mut config = valid_config();
        config.genome_length = 6;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_ecosystem_length_counts_chars() {
        let config = EvolutionConfig::new("αβγδ", "αβγδ", 10, 4, 5, None);
        assert_eq!(config.ecosystem_length(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = valid_config();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: EvolutionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ecosystem, config.ecosystem);
        assert_eq!(parsed.seed, config.seed);
        assert_eq!(parsed.generation_limit, config.generation_limit);
    }
}
