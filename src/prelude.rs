//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use nichevo::prelude::*;
//!
//! let config = EvolutionConfig::new("abcabc", "abc", 50, 3, 20, Some(42));
//! let mut evolution = Evolution::new(config).unwrap();
//! let outcome = evolution.run();
//! assert!(matches!(outcome, Outcome::Converged { .. }));
//! ```

pub use crate::base::{Alphabet, ConfigError, Ecosystem, Genome, InvalidGenome};
pub use crate::evolution::{edit_distance, FitnessEvaluator, MutationModel};
pub use crate::simulation::{
    Evolution, EvolutionConfig, NicheHistory, Outcome, Population,
};
