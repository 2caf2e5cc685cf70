use anyhow::{Result, bail};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

const CELL_UNDETERMINED: &str = "*";

/// Final state of one map cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// No single tile was settled on: the cell was infeasible or left with several candidates.
    Undetermined,
    /// Settled on the tile with this index.
    Fixed(usize),
}

impl Cell {
    /// Tile index, if fixed.
    pub fn tile(self) -> Option<usize> {
        match self {
            Cell::Fixed(index) => Some(index),
            Cell::Undetermined => None,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Cell::Undetermined => CELL_UNDETERMINED.fmt(f),
            Cell::Fixed(index) => index.fmt(f),
        }
    }
}

impl FromStr for Cell {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == CELL_UNDETERMINED {
            return Ok(Cell::Undetermined);
        }
        match s.parse::<usize>() {
            Ok(index) => Ok(Cell::Fixed(index)),
            Err(_) => bail!("Invalid cell string: {}", s),
        }
    }
}
