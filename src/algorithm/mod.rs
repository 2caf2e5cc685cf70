//! The steps of a generation run: priors, collapse, propagation and traversal.

mod collapse;
mod common;
mod prior;
mod progress;
mod propagate;
mod traverse;

pub use collapse::collapse;
pub use common::{NEIGHBOUR_OFFSETS, neighbours, shuffled_offsets, smoothed, step};
pub use prior::{HEIGHT_OFFSET, height, initialise};
pub use progress::TraversalProgress;
pub use propagate::{AFFINITY_MODIFIER, PropagationStats, propagate};
pub use traverse::{NUM_SEEDS, TraversalStats, traverse};
