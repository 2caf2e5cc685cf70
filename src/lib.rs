//! # `WaveTerrain`
//!
//! `WaveTerrain` procedurally generates 2D terrain maps by seeding per-cell tile weights from
//! gradient noise and then collapsing them with a randomised, single pass form of wave function
//! collapse.

// #![deny(warnings)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]

pub mod algorithm;
mod cell;
mod config;
mod generator;
mod map;
mod noise;
mod rules;
mod tile;
mod tileset;
mod wave;

pub use cell::Cell;
pub use config::{FALLBACK_NOISE_SCALE, GenerationConfig};
pub use generator::{generate, generate_with, generate_with_stats};
pub use map::Map;
pub use noise::NoiseField;
pub use rules::Rules;
pub use tile::{HeightBand, Tile};
pub use tileset::Tileset;
pub use wave::{Wave, normalize};
