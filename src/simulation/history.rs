//! Generation-indexed niche assignment history.
//!
//! The history is the simulation's only output beyond the terminal outcome:
//! one snapshot of the niche array per generation, starting with the scored
//! initial population. External consumers (e.g. a histogram animation) read
//! it by reference and never mutate it.

use serde::{Deserialize, Serialize};

/// Append-only record of per-generation niche assignments.
///
/// Snapshot `g` holds the ordered niche indices of the individuals that
/// survived generation `g`; snapshot 0 is the initial population.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NicheHistory {
    snapshots: Vec<Vec<usize>>,
}

impl NicheHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the snapshot for the next generation.
    pub fn record(&mut self, niches: Vec<usize>) {
        self.snapshots.push(niches);
    }

    /// Number of recorded generations (including generation 0).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if no generation has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The niche assignments recorded for generation `g`.
    pub fn generation(&self, g: usize) -> Option<&[usize]> {
        self.snapshots.get(g).map(Vec::as_slice)
    }

    /// Iterate over all snapshots in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.snapshots.iter().map(Vec::as_slice)
    }

    /// Niche occupancy counts for generation `g` over `bins` niches.
    ///
    /// Convenience for consumers that render per-generation histograms;
    /// `bins` should be the ecosystem's window count. Niches outside
    /// `[0, bins)` are ignored.
    pub fn histogram(&self, g: usize, bins: usize) -> Option<Vec<usize>> {
        let snapshot = self.snapshots.get(g)?;
        let mut counts = vec![0usize; bins];
        for &niche in snapshot {
            if let Some(count) = counts.get_mut(niche) {
                *count += 1;
            }
        }
        Some(counts)
    }
}
