use std::ops::Index;

/// Tile to tile affinity table.
///
/// Row `t` holds, for every candidate tile, the affinity of placing it next to a cell fixed to `t`.
/// Tiles may have no row at all, in which case they exert no pressure on their neighbours.
#[derive(Clone, Debug, PartialEq)]
pub struct Rules {
    rows: Vec<Option<Vec<f64>>>,
}

impl Rules {
    /// Build from one optional dense row per tile.
    pub fn new(rows: Vec<Option<Vec<f64>>>) -> Self {
        let n = rows.len();
        debug_assert!(
            rows.iter().flatten().all(|row| row.len() == n),
            "Affinity rows must be n entries long"
        );
        Self { rows }
    }

    /// Build from sparse `(current, candidate, affinity)` triples; absent pairs have affinity 0.
    ///
    /// Only tiles appearing as `current` receive a row.
    pub fn from_pairs(num_tiles: usize, pairs: &[(usize, usize, f64)]) -> Self {
        let mut rows = vec![None; num_tiles];
        for &(current, candidate, affinity) in pairs {
            debug_assert!(current < num_tiles && candidate < num_tiles);
            let row = rows[current].get_or_insert_with(|| vec![0.0; num_tiles]);
            row[candidate] = affinity;
        }
        Self { rows }
    }

    /// Number of tiles covered.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table covers no tiles.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Affinity row of `tile`, if it has one.
    pub fn row(&self, tile: usize) -> Option<&[f64]> {
        self.rows.get(tile)?.as_deref()
    }

    /// Affinity of `candidate` next to `current`, 0 when absent.
    pub fn affinity(&self, current: usize, candidate: usize) -> f64 {
        self.row(current)
            .and_then(|row| row.get(candidate))
            .copied()
            .unwrap_or(0.0)
    }
}

impl Index<(usize, usize)> for Rules {
    type Output = f64;
    fn index(&self, (current, candidate): (usize, usize)) -> &Self::Output {
        self.row(current)
            .and_then(|row| row.get(candidate))
            .unwrap_or(&0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_entries_are_zero() {
        let rules = Rules::from_pairs(3, &[(0, 1, 0.5), (0, 0, 0.9)]);
        assert_eq!(rules.affinity(0, 0), 0.9);
        assert_eq!(rules.affinity(0, 1), 0.5);
        assert_eq!(rules.affinity(0, 2), 0.0);
        assert_eq!(rules[(0, 2)], 0.0);
    }

    #[test]
    fn tiles_without_pairs_have_no_row() {
        let rules = Rules::from_pairs(3, &[(1, 2, 1.0)]);
        assert!(rules.row(0).is_none());
        assert_eq!(rules.row(1), Some(&[0.0, 0.0, 1.0][..]));
        assert!(rules.row(2).is_none());
        assert_eq!(rules.affinity(2, 2), 0.0);
        assert!(rules.row(7).is_none());
    }
}
