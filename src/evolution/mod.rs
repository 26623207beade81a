//! Evolution module providing fitness, mating, mutation, and selection.
//!
//! This module implements the core evolutionary operators:
//! - **Fitness**: edit-distance scoring against ecosystem windows
//! - **Mating**: panmictic, niche-constrained pairing with
//!   fitness-proportional offspring counts
//! - **Mutation**: unconditional substitution plus stochastic indel
//! - **Selection**: deterministic truncation by fitness threshold

pub mod fitness;
pub mod mating;
pub mod mutation;
pub mod selection;

pub use fitness::{edit_distance, FitnessEvaluator};
pub use mating::mate;
pub use mutation::MutationModel;
pub use selection::select;
