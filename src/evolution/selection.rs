//! Deterministic truncation selection.
//!
//! Survival is decided by a fitness threshold read off a descending sort of
//! the fitness array, not by probabilistic sampling.

use crate::simulation::Population;

/// Truncate the population back toward `population_size`.
///
/// The threshold is the fitness at rank `population_size` of the descending
/// fitness order. Individuals are discarded from the highest index downward
/// while their fitness is at or below the threshold and the survivor count
/// still exceeds `population_size`; survivors are then materialized in one
/// pass, keeping all three parallel arrays in lockstep.
///
/// Because the comparison is `<=`, ties exactly at the threshold are
/// stripped from the back until the survivor count reaches the target; which
/// tied individuals survive is an index accident, not a fitness ranking.
/// A population already at or below the target is left untouched, so
/// undersized populations from earlier generations simply persist.
pub fn select(population: &mut Population, population_size: usize) {
    let len = population.len();
    if len <= population_size {
        return;
    }

    let mut fitness_order = population.fitness().to_vec();
    fitness_order.sort_unstable_by(|a, b| b.cmp(a));
    let fitness_to_survive = fitness_order[population_size];

    let mut keep = vec![true; len];
    let mut survivors = len;
    for i in (0..len).rev() {
        if survivors <= population_size {
            break;
        }
        if population.fitness()[i] <= fitness_to_survive {
            keep[i] = false;
            survivors -= 1;
        }
    }

    population.retain_mask(&keep);
}
