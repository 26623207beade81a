//! Simulation engine, configuration, and population management.
//!
//! This module provides the generation loop, the validated run
//! configuration, the population's parallel arrays, and the niche history
//! handed to external consumers.

pub mod engine;
pub mod history;
pub mod initialization;
pub mod parameters;
pub mod population;

pub use engine::{Evolution, Outcome};
pub use history::NicheHistory;
pub use initialization::generate_initial_population;
pub use parameters::EvolutionConfig;
pub use population::Population;
