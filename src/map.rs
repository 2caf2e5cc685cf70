use anyhow::{Context, Result, bail};
use ndarray::Array2;
use std::{
    fmt::{Display, Formatter},
    fs::File,
    io::Write,
    path::Path,
    str::FromStr,
};

use crate::{Cell, Tileset};

const GLYPH_UNDETERMINED: char = '?';

/// A finished grid of tile assignments, indexed `(y, x)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Map {
    cells: Array2<Cell>,
}

impl Map {
    /// Wrap an array of cells.
    pub fn new(cells: Array2<Cell>) -> Self {
        debug_assert!(!cells.is_empty(), "Map must contain at least one cell");
        Self { cells }
    }

    /// Read a map from a text file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, holds a cell that is neither `*` nor an index, or has
    /// rows of differing length.
    pub fn load(path: &Path) -> Result<Self> {
        let map_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read map {}", path.display()))?;
        map_str.parse()
    }

    /// Write the map as text.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be created or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create map {}", path.display()))?;
        write!(file, "{self}")?;
        Ok(())
    }

    /// Map dimensions as `(height, width)`.
    pub fn size(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Underlying cells.
    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[(y, x)]
    }

    /// Largest fixed tile index on the map.
    pub fn max_index(&self) -> Option<usize> {
        self.cells.iter().filter_map(|cell| cell.tile()).max()
    }

    /// Number of cells fixed to a tile.
    pub fn num_fixed(&self) -> usize {
        self.cells.iter().filter(|cell| cell.tile().is_some()).count()
    }

    /// Number of cells left without a tile.
    pub fn num_undetermined(&self) -> usize {
        self.cells.len() - self.num_fixed()
    }

    /// Render the map as rows of tile glyphs.
    pub fn render_glyphs(&self, tileset: &Tileset) -> String {
        debug_assert!(
            self.max_index().is_none_or(|index| index < tileset.len()),
            "Tile index out of bounds for tileset"
        );
        let mut out = String::with_capacity(self.cells.len() + self.cells.nrows());
        for row in self.cells.rows() {
            for cell in row {
                let glyph = cell
                    .tile()
                    .and_then(|index| tileset.tiles().get(index))
                    .map_or(GLYPH_UNDETERMINED, |tile| tile.glyph);
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}

impl FromStr for Map {
    type Err = anyhow::Error;

    fn from_str(map_str: &str) -> Result<Self> {
        let rows = map_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| {
                line.split_whitespace()
                    .map(str::parse::<Cell>)
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            bail!("Map must contain at least one cell");
        }
        if rows.iter().any(|row| row.len() != width) {
            bail!("All rows must have the same length");
        }

        let cells = Array2::from_shape_vec((height, width), rows.into_iter().flatten().collect())
            .context("Failed to create cell array")?;
        Ok(Self::new(cells))
    }
}

impl Display for Map {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let print_width = self.max_index().unwrap_or(0).to_string().len();
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{cell:print_width$} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_text_maps() {
        let map: Map = "
            # a comment
            0 1 *
            7 * 2
        "
        .parse()
        .unwrap();
        assert_eq!(map.size(), (2, 3));
        assert_eq!(map.get(2, 0), Cell::Undetermined);
        assert_eq!(map.get(0, 1), Cell::Fixed(7));
        assert_eq!(map.num_fixed(), 4);
        assert_eq!(map.num_undetermined(), 2);
        assert_eq!(map.to_string(), "0 1 * \n7 * 2 \n");
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!("0 1\n2".parse::<Map>().is_err());
        assert!("0 x".parse::<Map>().is_err());
        assert!("".parse::<Map>().is_err());
    }

    #[test]
    fn survives_a_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.txt");
        let map: Map = "10 * 3\n4 5 12".parse().unwrap();
        map.save(&path).unwrap();
        assert_eq!(Map::load(&path).unwrap(), map);
    }

    #[test]
    fn renders_glyphs() {
        let map: Map = "0 1\n* 6".parse().unwrap();
        assert_eq!(map.render_glyphs(&Tileset::terrain()), "~.\n?*\n");
    }
}
