use ndarray::Array2;

use crate::{Cell, Map};

/// Scale `weights` so they sum to one.
///
/// A vector summing to exactly zero is returned unchanged.
pub fn normalize(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return weights.to_vec();
    }
    weights.iter().map(|w| w / total).collect()
}

/// Square grid of per-cell tile weight vectors.
///
/// This is the entire state of a generation run. Cells are addressed by `(x, y)` and stored
/// row-major, so the linear index of a cell is `x + y * size`.
#[derive(Clone, Debug, PartialEq)]
pub struct Wave {
    num_tiles: usize,
    cells: Array2<Vec<f64>>,
}

impl Wave {
    /// A `size` by `size` grid where every tile is equally likely everywhere.
    pub fn new(size: usize, num_tiles: usize) -> Self {
        debug_assert!(size > 0, "Wave size must be greater than zero");
        debug_assert!(num_tiles > 0, "Wave must track at least one tile");
        let uniform = vec![1.0 / num_tiles as f64; num_tiles];
        Self {
            num_tiles,
            cells: Array2::from_elem((size, size), uniform),
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Length of every weight vector.
    pub fn num_tiles(&self) -> usize {
        self.num_tiles
    }

    /// Linear index of `(x, y)`.
    pub fn index(&self, (x, y): (usize, usize)) -> usize {
        x + y * self.size()
    }

    /// Weights of cell `(x, y)`.
    pub fn get(&self, (x, y): (usize, usize)) -> &[f64] {
        &self.cells[(y, x)]
    }

    /// Replace the weights of cell `(x, y)`.
    pub fn set(&mut self, (x, y): (usize, usize), weights: Vec<f64>) {
        debug_assert_eq!(
            weights.len(),
            self.num_tiles,
            "Weight vector length must match number of tiles"
        );
        self.cells[(y, x)] = weights;
    }

    /// Sum of the weights of `(x, y)`.
    pub fn total(&self, pos: (usize, usize)) -> f64 {
        self.get(pos).iter().sum()
    }

    /// The tile `(x, y)` holds with weight exactly one, if any.
    pub fn determined(&self, pos: (usize, usize)) -> Option<usize> {
        self.get(pos).iter().position(|&w| w == 1.0)
    }

    /// Whether exactly one weight of `(x, y)` is one and all others are zero.
    pub fn is_determined(&self, pos: (usize, usize)) -> bool {
        let weights = self.get(pos);
        weights.iter().filter(|&&w| w == 1.0).count() == 1
            && weights.iter().all(|&w| w == 1.0 || w == 0.0)
    }

    /// Whether every weight of `(x, y)` is zero.
    pub fn is_infeasible(&self, pos: (usize, usize)) -> bool {
        self.get(pos).iter().all(|&w| w == 0.0)
    }

    /// Iterate over every coordinate in linear index order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let size = self.size();
        (0..size * size).map(move |i| (i % size, i / size))
    }

    /// Collapse the grid into its final tile assignments.
    pub fn to_map(&self) -> Map {
        let size = self.size();
        let cells = Array2::from_shape_fn((size, size), |(y, x)| {
            if self.is_determined((x, y)) {
                self.determined((x, y)).map_or(Cell::Undetermined, Cell::Fixed)
            } else {
                Cell::Undetermined
            }
        });
        Map::new(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() < 1e-12, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn normalize_sums_to_one() {
        let weights = normalize(&[1.0, 3.0, 0.0, 4.0]);
        assert_close(&weights, &[0.125, 0.375, 0.0, 0.5]);
        assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_is_idempotent() {
        for v in [
            vec![0.3, 0.3, 0.3],
            vec![0.1, 2.0, 7.5, 0.0, 0.25],
            vec![1e-9, 5.0],
            vec![4.0],
        ] {
            let once = normalize(&v);
            assert_close(&normalize(&once), &once);
        }
    }

    #[test]
    fn normalize_leaves_zero_vector_alone() {
        assert_eq!(normalize(&[0.0, 0.0, 0.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn single_entry_normalizes_to_exactly_one() {
        assert_eq!(normalize(&[0.0, 0.37, 0.0]), vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn starts_uniform() {
        let wave = Wave::new(4, 4);
        assert_eq!(wave.size(), 4);
        assert_eq!(wave.get((3, 2)), &[0.25; 4]);
        assert!(!wave.is_determined((0, 0)));
        assert_eq!(wave.positions().count(), 16);
    }

    #[test]
    fn linear_index_is_row_major() {
        let wave = Wave::new(5, 2);
        assert_eq!(wave.index((3, 2)), 13);
        let positions: Vec<_> = wave.positions().collect();
        assert_eq!(positions[13], (3, 2));
    }

    #[test]
    fn determined_requires_exact_one_hot() {
        let mut wave = Wave::new(2, 3);
        wave.set((1, 0), vec![0.0, 1.0, 0.0]);
        assert!(wave.is_determined((1, 0)));
        assert_eq!(wave.determined((1, 0)), Some(1));

        wave.set((0, 1), vec![0.0, 1.0, 0.5]);
        assert!(!wave.is_determined((0, 1)));

        wave.set((1, 1), vec![0.0, 0.0, 0.0]);
        assert!(wave.is_infeasible((1, 1)));
        assert!(!wave.is_determined((1, 1)));
    }

    #[test]
    fn converts_to_map() {
        let mut wave = Wave::new(2, 3);
        wave.set((1, 0), vec![0.0, 0.0, 1.0]);
        wave.set((0, 1), vec![0.0, 0.0, 0.0]);
        let map = wave.to_map();
        assert_eq!(map.get(1, 0), Cell::Fixed(2));
        assert_eq!(map.get(0, 1), Cell::Undetermined);
        assert_eq!(map.get(0, 0), Cell::Undetermined);
    }
}
