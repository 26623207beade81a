//! Nichevo: a niche-based evolutionary simulation of symbolic genomes.
//!
//! A population of random fixed-length strings is repeatedly scored against
//! sliding windows of a reference sequence (the "ecosystem") using edit
//! distance, mated within fitness niches, mutated, and truncated by
//! selection, until some individual matches a window perfectly or the
//! generation budget is exhausted.

pub mod base;
pub mod evolution;
pub mod prelude;
pub mod simulation;

// Re-export commonly used types for convenient external access.
//
// These types form the public, stable surface that most consumers of the
// library will use when configuring and running simulations.
pub use base::{Alphabet, ConfigError, Ecosystem, Genome, InvalidGenome};
pub use simulation::{Evolution, EvolutionConfig, NicheHistory, Outcome};
