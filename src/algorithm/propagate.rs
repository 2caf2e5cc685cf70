use rand::Rng;

use super::common::{shuffled_offsets, step};
use crate::{Rules, Wave, normalize};

/// Strength with which a neighbour's existing weight amplifies an affinity.
pub const AFFINITY_MODIFIER: f64 = 6.0;

/// Work done by one call to [`propagate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropagationStats {
    /// Determined cells whose affinity row was pushed onto their neighbours.
    pub processed: usize,
    /// Largest number of coordinates waiting on the work stack at once.
    pub max_pending: usize,
}

/// Re-weight the weights of a cell next to one fixed to a tile with affinity `row`.
fn reweight(existing: &[f64], row: &[f64]) -> Vec<f64> {
    existing
        .iter()
        .zip(row)
        .map(|(&weight, &affinity)| {
            if weight != 0.0 && affinity != 0.0 {
                affinity - affinity * ((1.0 - AFFINITY_MODIFIER) * weight)
            } else {
                0.0
            }
        })
        .collect()
}

/// Push constraint pressure outwards from `origin`, which has just been fixed to `tile`.
///
/// The tile of every processed cell is read back from the grid, so an `origin` that is not
/// determined is left alone and nothing changes.
///
/// Each neighbour of a determined cell is re-weighted by that cell's affinity row and
/// renormalised. Neighbours that end up determined are processed in turn. A cell only enters
/// the stack on becoming determined, and a determined cell can only stay as it is or drop to
/// all zeros, so the stack never holds more entries than the grid has cells.
pub fn propagate(
    wave: &mut Wave,
    rules: &Rules,
    origin: (usize, usize),
    tile: usize,
    rng: &mut impl Rng,
) -> PropagationStats {
    let size = wave.size();
    let mut stats = PropagationStats {
        processed: 0,
        max_pending: 1,
    };
    let mut stack = vec![origin];

    while let Some(pos) = stack.pop() {
        let Some(current) = wave.determined(pos) else {
            continue;
        };
        let Some(row) = rules.row(current) else {
            continue;
        };
        stats.processed += 1;

        for delta in shuffled_offsets(rng) {
            let Some(neighbour) = step(pos, delta, size) else {
                continue;
            };
            let updated = normalize(&reweight(wave.get(neighbour), row));
            if updated.as_slice() == wave.get(neighbour) {
                continue;
            }
            wave.set(neighbour, updated);
            if wave.is_determined(neighbour) {
                stack.push(neighbour);
                stats.max_pending = stats.max_pending.max(stack.len());
            }
        }
    }

    log::trace!(
        "Propagation of tile {tile} from {origin:?} processed {} cells, at most {} pending",
        stats.processed,
        stats.max_pending
    );
    stats
}
