use rand::{Rng, seq::SliceRandom};

use crate::Wave;

/// Offsets to the eight surrounding cells as `(dx, dy)`.
pub const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The eight neighbour offsets in a fresh random order.
pub fn shuffled_offsets(rng: &mut impl Rng) -> [(isize, isize); 8] {
    let mut offsets = NEIGHBOUR_OFFSETS;
    offsets.shuffle(rng);
    offsets
}

/// Step from `pos` by `delta`, if the result stays on a `size` by `size` grid.
pub fn step(pos: (usize, usize), delta: (isize, isize), size: usize) -> Option<(usize, usize)> {
    let x = match pos.0.checked_add_signed(delta.0) {
        Some(val) if val < size => val,
        _ => return None,
    };
    let y = match pos.1.checked_add_signed(delta.1) {
        Some(val) if val < size => val,
        _ => return None,
    };
    Some((x, y))
}

/// In-bounds neighbours of `pos`, in fixed order.
pub fn neighbours(pos: (usize, usize), size: usize) -> impl Iterator<Item = (usize, usize)> {
    NEIGHBOUR_OFFSETS
        .iter()
        .filter_map(move |&delta| step(pos, delta, size))
}

/// Component-wise mean of the in-bounds neighbours of `pos`, normalised.
///
/// `None` when `pos` has no neighbours.
pub fn smoothed(wave: &Wave, pos: (usize, usize)) -> Option<Vec<f64>> {
    let mut sum = vec![0.0; wave.num_tiles()];
    let mut count = 0u32;
    for neighbour in neighbours(pos, wave.size()) {
        for (total, w) in sum.iter_mut().zip(wave.get(neighbour)) {
            *total += w;
        }
        count += 1;
    }
    if count == 0 {
        return None;
    }
    let mean: Vec<f64> = sum.iter().map(|total| total / f64::from(count)).collect();
    Some(crate::normalize(&mean))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn steps_stay_on_grid() {
        assert_eq!(step((0, 0), (-1, 0), 3), None);
        assert_eq!(step((2, 1), (1, 0), 3), None);
        assert_eq!(step((1, 1), (1, -1), 3), Some((2, 0)));
    }

    #[test]
    fn corner_edge_and_interior_neighbour_counts() {
        assert_eq!(neighbours((0, 0), 3).count(), 3);
        assert_eq!(neighbours((1, 0), 3).count(), 5);
        assert_eq!(neighbours((1, 1), 3).count(), 8);
        assert_eq!(neighbours((0, 0), 1).count(), 0);
    }

    #[test]
    fn shuffle_is_a_permutation_of_offsets() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut offsets = shuffled_offsets(&mut rng);
        offsets.sort_unstable();
        let mut expected = NEIGHBOUR_OFFSETS;
        expected.sort_unstable();
        assert_eq!(offsets, expected);
    }

    #[test]
    fn smoothing_averages_neighbours() {
        let mut wave = Wave::new(2, 2);
        wave.set((1, 0), vec![1.0, 0.0]);
        wave.set((0, 1), vec![0.0, 0.0]);
        wave.set((1, 1), vec![0.0, 1.0]);
        let weights = smoothed(&wave, (0, 0)).unwrap();
        assert!((weights[0] - 0.5).abs() < 1e-12);
        assert!((weights[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn smoothing_a_lone_cell_is_none() {
        assert!(smoothed(&Wave::new(1, 3), (0, 0)).is_none());
    }
}
