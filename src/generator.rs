use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    GenerationConfig, NoiseField, Tileset, Wave,
    algorithm::{TraversalProgress, TraversalStats, initialise, traverse},
};

/// Run a full generation, seeded from `config.seed` or from OS entropy.
pub fn generate(config: &GenerationConfig, tileset: &Tileset) -> Wave {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    generate_with(config, tileset, &mut rng)
}

/// Run a full generation drawing every random choice from `rng`.
///
/// The returned wave is complete: every cell reachable from the seeds has been visited.
pub fn generate_with(config: &GenerationConfig, tileset: &Tileset, rng: &mut impl Rng) -> Wave {
    generate_with_stats(config, tileset, rng).0
}

/// As [`generate_with`], also reporting the traversal summary.
pub fn generate_with_stats(
    config: &GenerationConfig,
    tileset: &Tileset,
    rng: &mut impl Rng,
) -> (Wave, TraversalStats) {
    let size = if config.size == 0 {
        log::warn!("Grid size 0 clamped to 1");
        1
    } else {
        config.size
    };
    let scale = config.effective_scale();
    log::debug!(
        "Generating {size}x{size} map over {} tiles at noise scale {scale}",
        tileset.len()
    );

    let noise = NoiseField::new(rng);
    let mut wave = Wave::new(size, tileset.len());
    initialise(&mut wave, tileset, &noise, scale);

    let progress = TraversalProgress::new(size * size, config.show_progress);
    let stats = traverse(&mut wave, tileset.rules(), rng, &progress);
    progress.finish();

    let determined = wave.positions().filter(|&pos| wave.is_determined(pos)).count();
    let infeasible = wave.positions().filter(|&pos| wave.is_infeasible(pos)).count();
    log::info!(
        "Generated {size}x{size} map: {determined} determined, {infeasible} infeasible, {} undetermined",
        size * size - determined - infeasible
    );

    (wave, stats)
}
