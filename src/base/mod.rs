//! Base types for genome and ecosystem representation.
//!
//! This module provides the foundational types of the simulation: the symbol
//! alphabet, the immutable genome value type, and the reference ecosystem.

mod alphabet;
mod ecosystem;
mod errors;
mod genome;

pub use alphabet::Alphabet;
pub use ecosystem::Ecosystem;
pub use errors::{ConfigError, InvalidGenome};
pub use genome::Genome;
