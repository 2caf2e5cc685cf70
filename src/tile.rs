use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Falloff outside a height band: (distance below which the weight applies, weight).
const FALLOFF: [(f64, f64); 3] = [(0.1, 0.75), (0.2, 0.5), (0.3, 0.25)];

/// Closed interval of noise values within which a tile is valid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeightBand {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl HeightBand {
    /// Construct a new band.
    pub fn new(min: f64, max: f64) -> Self {
        debug_assert!(min <= max, "Band minimum must not exceed its maximum");
        Self { min, max }
    }

    /// Whether `value` lies within the band.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Prior weight of a noise `value` against this band.
    ///
    /// Full weight inside the band, stepping down to zero within 0.3 of either edge.
    /// Values below the band only receive falloff weight when they are positive.
    pub fn weight(&self, value: f64) -> f64 {
        if self.contains(value) {
            return 1.0;
        }
        for (distance, weight) in FALLOFF {
            let below = value > 0.0 && value < self.min && self.min - value < distance;
            let above = value > self.max && value - self.max < distance;
            if below || above {
                return weight;
            }
        }
        0.0
    }
}

/// A single kind of terrain tile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Unique name within its tileset.
    pub name: String,
    /// Character used when printing a map.
    pub glyph: char,
    /// Noise values the tile is valid for.
    pub band: HeightBand,
}

impl Tile {
    /// Construct a new tile.
    pub fn new(name: &str, glyph: char, band: HeightBand) -> Self {
        Self {
            name: name.to_string(),
            glyph,
            band,
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' [{}, {}]",
            self.name, self.glyph, self.band.min, self.band.max
        )
    }
}
