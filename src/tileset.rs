use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};

use crate::{HeightBand, Rules, Tile};

/// On-disk layout of a single tileset entry.
#[derive(Serialize, Deserialize)]
struct TileEntry {
    name: String,
    glyph: char,
    band: HeightBand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    affinity: Option<BTreeMap<String, f64>>,
}

#[derive(Serialize, Deserialize)]
struct TilesetFile {
    tiles: Vec<TileEntry>,
}

/// Ordered catalogue of tile kinds and their adjacency affinities.
///
/// The position of a tile in the catalogue is its index in every weight vector.
#[derive(Clone, Debug, PartialEq)]
pub struct Tileset {
    tiles: Vec<Tile>,
    rules: Rules,
}

impl Tileset {
    /// Construct from tiles and a matching affinity table.
    pub fn new(tiles: Vec<Tile>, rules: Rules) -> Self {
        debug_assert!(!tiles.is_empty(), "Tileset must contain at least one tile");
        debug_assert!(
            tiles.len() == rules.len(),
            "Number of tiles must match number of rules"
        );
        Self { tiles, rules }
    }

    /// The built-in eight tile terrain catalogue.
    pub fn terrain() -> Self {
        const OCEAN: usize = 0;
        const BEACH: usize = 1;
        const GRASS: usize = 2;
        const FOREST: usize = 3;
        const HILL: usize = 4;
        const MOUNTAIN: usize = 5;
        const GLACIER: usize = 6;
        const FRESHWATER: usize = 7;

        let tiles = vec![
            Tile::new("ocean", '~', HeightBand::new(-1.5, 0.0)),
            Tile::new("beach", '.', HeightBand::new(0.0, 0.1)),
            Tile::new("grass", '"', HeightBand::new(0.1, 0.35)),
            Tile::new("forest", 'T', HeightBand::new(0.25, 0.5)),
            Tile::new("hill", 'n', HeightBand::new(0.45, 0.65)),
            Tile::new("mountain", 'M', HeightBand::new(0.6, 0.85)),
            Tile::new("glacier", '*', HeightBand::new(0.8, 1.5)),
            Tile::new("freshwater", '=', HeightBand::new(0.15, 0.3)),
        ];

        let rules = Rules::from_pairs(
            tiles.len(),
            &[
                (OCEAN, OCEAN, 0.9),
                (OCEAN, BEACH, 0.5),
                (BEACH, OCEAN, 0.4),
                (BEACH, BEACH, 0.6),
                (BEACH, GRASS, 0.5),
                (BEACH, FRESHWATER, 0.1),
                (GRASS, BEACH, 0.3),
                (GRASS, GRASS, 0.8),
                (GRASS, FOREST, 0.5),
                (GRASS, HILL, 0.2),
                (GRASS, FRESHWATER, 0.2),
                (FOREST, GRASS, 0.5),
                (FOREST, FOREST, 0.8),
                (FOREST, HILL, 0.4),
                (FOREST, FRESHWATER, 0.1),
                (HILL, GRASS, 0.2),
                (HILL, FOREST, 0.4),
                (HILL, HILL, 0.7),
                (HILL, MOUNTAIN, 0.4),
                (MOUNTAIN, HILL, 0.4),
                (MOUNTAIN, MOUNTAIN, 0.8),
                (MOUNTAIN, GLACIER, 0.3),
                (GLACIER, MOUNTAIN, 0.4),
                (GLACIER, GLACIER, 0.9),
                (FRESHWATER, GRASS, 0.5),
                (FRESHWATER, FOREST, 0.3),
                (FRESHWATER, FRESHWATER, 0.7),
            ],
        );

        Self::new(tiles, rules)
    }

    /// Parse a tileset from YAML.
    ///
    /// # Errors
    ///
    /// Fails on malformed YAML, an empty tile list, duplicate tile names, a band whose minimum
    /// exceeds its maximum, or an affinity that names an unknown tile or lies outside `[0, 1]`.
    pub fn from_yaml(data: &str) -> Result<Self> {
        let file: TilesetFile = serde_yaml::from_str(data).context("Invalid tileset YAML")?;
        if file.tiles.is_empty() {
            bail!("Tileset must contain at least one tile");
        }

        let mut index = BTreeMap::new();
        for (i, entry) in file.tiles.iter().enumerate() {
            if entry.band.min > entry.band.max {
                bail!(
                    "Tile '{}' has band minimum {} above maximum {}",
                    entry.name,
                    entry.band.min,
                    entry.band.max
                );
            }
            if index.insert(entry.name.as_str(), i).is_some() {
                bail!("Duplicate tile name '{}'", entry.name);
            }
        }

        let num_tiles = file.tiles.len();
        let mut rows = Vec::with_capacity(num_tiles);
        for entry in &file.tiles {
            let Some(affinity) = &entry.affinity else {
                rows.push(None);
                continue;
            };
            let mut row = vec![0.0; num_tiles];
            for (name, &value) in affinity {
                let Some(&candidate) = index.get(name.as_str()) else {
                    bail!("Tile '{}' has affinity for unknown tile '{}'", entry.name, name);
                };
                if !(0.0..=1.0).contains(&value) {
                    bail!(
                        "Affinity of '{}' for '{}' must lie in [0, 1], got {}",
                        entry.name,
                        name,
                        value
                    );
                }
                row[candidate] = value;
            }
            rows.push(Some(row));
        }

        let tiles = file
            .tiles
            .into_iter()
            .map(|entry| Tile {
                name: entry.name,
                glyph: entry.glyph,
                band: entry.band,
            })
            .collect();

        Ok(Self::new(tiles, Rules::new(rows)))
    }

    /// Serialise to YAML; zero affinities are omitted.
    ///
    /// # Errors
    ///
    /// Fails if the YAML emitter does.
    pub fn to_yaml(&self) -> Result<String> {
        let tiles = self
            .tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| TileEntry {
                name: tile.name.clone(),
                glyph: tile.glyph,
                band: tile.band,
                affinity: self.rules.row(i).map(|row| {
                    row.iter()
                        .enumerate()
                        .filter(|&(_, &value)| value != 0.0)
                        .map(|(j, &value)| (self.tiles[j].name.clone(), value))
                        .collect()
                }),
            })
            .collect();
        serde_yaml::to_string(&TilesetFile { tiles }).context("Failed to serialise tileset")
    }

    /// Load a tileset from a YAML file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is rejected by [`from_yaml`](Self::from_yaml).
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tileset {}", path.display()))?;
        Self::from_yaml(&data).with_context(|| format!("In tileset {}", path.display()))
    }

    /// Write the tileset to a YAML file.
    ///
    /// # Errors
    ///
    /// Fails when serialising or writing the file fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_yaml()?)
            .with_context(|| format!("Failed to write tileset {}", path.display()))
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the tileset is empty.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in catalogue order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Affinity table.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Index of the tile called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.name == name)
    }

    /// Banded prior weights of a noise `value` against every tile, unnormalised.
    pub fn band_weights(&self, value: f64) -> Vec<f64> {
        self.tiles.iter().map(|tile| tile.band.weight(value)).collect()
    }
}
