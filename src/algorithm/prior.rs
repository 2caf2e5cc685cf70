use crate::{NoiseField, Tileset, Wave, normalize};

/// Offset added to every noise sample before banding.
pub const HEIGHT_OFFSET: f64 = 0.1;

/// Terrain height at `(x, y)` for a given noise `scale`.
pub fn height(noise: &NoiseField, (x, y): (usize, usize), scale: f64) -> f64 {
    noise.sample(x as f64 / scale, y as f64 / scale, 0.0) + HEIGHT_OFFSET
}

/// Overwrite every cell of `wave` with its normalised banded weights.
pub fn initialise(wave: &mut Wave, tileset: &Tileset, noise: &NoiseField, scale: f64) {
    debug_assert_eq!(
        wave.num_tiles(),
        tileset.len(),
        "Wave and tileset must agree on the number of tiles"
    );
    for pos in wave.positions() {
        let weights = normalize(&tileset.band_weights(height(noise, pos, scale)));
        wave.set(pos, weights);
    }
}
