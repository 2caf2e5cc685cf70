use rand::Rng;

use super::propagate::{PropagationStats, propagate};
use crate::{Rules, Wave};

/// Draw a tile index in proportion to `weights`, which must have a positive `total`.
fn pick(weights: &[f64], total: f64, rng: &mut impl Rng) -> usize {
    let mut remainder = rng.random_range(0.0..total);
    let mut last = 0;
    for (index, &weight) in weights.iter().enumerate() {
        if weight == 0.0 {
            continue;
        }
        last = index;
        remainder -= weight;
        if remainder <= 0.0 {
            return index;
        }
    }
    // Rounding can leave a sliver of remainder after the final candidate
    last
}

/// Fix cell `pos` to a single tile drawn from its weights, then propagate.
///
/// Returns the chosen tile and the propagation work, or `None` if the cell has no weight left
/// to draw from, in which case nothing is changed.
pub fn collapse(
    wave: &mut Wave,
    rules: &Rules,
    pos: (usize, usize),
    rng: &mut impl Rng,
) -> Option<(usize, PropagationStats)> {
    let total = wave.total(pos);
    if total <= 0.0 {
        return None;
    }

    let tile = pick(wave.get(pos), total, rng);
    let mut fixed = vec![0.0; wave.num_tiles()];
    fixed[tile] = 1.0;
    wave.set(pos, fixed);

    let stats = propagate(wave, rules, pos, tile, rng);
    Some((tile, stats))
}
