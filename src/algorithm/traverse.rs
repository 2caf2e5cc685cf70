use fixedbitset::FixedBitSet;
use rand::Rng;

use super::{
    collapse::collapse,
    common::{shuffled_offsets, smoothed, step},
    progress::TraversalProgress,
};
use crate::{Rules, Wave};

/// Number of random starting cells for the exploration.
pub const NUM_SEEDS: usize = 5;

/// Summary of one traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Cells popped from the exploration stack, including repeated seeds.
    pub visits: usize,
    /// Visits where the cell had no weight to collapse.
    pub infeasible: usize,
    /// Visits that replaced the cell's weights with the neighbour average.
    pub smoothed: usize,
    /// Largest propagation stack seen during the traversal.
    pub max_pending: usize,
}

/// Walk the grid from random seeds, collapsing every reachable cell once.
///
/// Exploration is depth first: the most recently discovered cell is visited next, and each
/// visit discovers its unvisited neighbours in a random order. A visit that leaves its cell
/// undetermined replaces the cell's weights with the normalised mean of its neighbours.
/// Seeds are not de-duplicated, so a seed drawn twice is visited twice.
pub fn traverse(
    wave: &mut Wave,
    rules: &Rules,
    rng: &mut impl Rng,
    progress: &TraversalProgress,
) -> TraversalStats {
    let size = wave.size();
    let mut visited = FixedBitSet::with_capacity(size * size);
    let mut stack = Vec::with_capacity(size * size);
    let mut stats = TraversalStats::default();

    for _ in 0..NUM_SEEDS {
        let seed = (rng.random_range(0..size), rng.random_range(0..size));
        visited.insert(wave.index(seed));
        stack.push(seed);
    }
    log::debug!("Traversal seeded at {stack:?}");

    while let Some(pos) = stack.pop() {
        stats.visits += 1;
        match collapse(wave, rules, pos, rng) {
            Some((_, propagation)) => {
                stats.max_pending = stats.max_pending.max(propagation.max_pending);
            }
            None => {
                stats.infeasible += 1;
                progress.set_infeasible(stats.infeasible);
            }
        }

        if !wave.is_determined(pos) {
            if let Some(weights) = smoothed(wave, pos) {
                wave.set(pos, weights);
                stats.smoothed += 1;
            }
        }

        for delta in shuffled_offsets(rng) {
            let Some(neighbour) = step(pos, delta, size) else {
                continue;
            };
            let index = wave.index(neighbour);
            if !visited.contains(index) {
                visited.insert(index);
                stack.push(neighbour);
            }
        }
        progress.increment();
    }

    stats
}
