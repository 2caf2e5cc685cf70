use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Noise scale substituted when the configured scale is too small to be meaningful.
pub const FALLBACK_NOISE_SCALE: f64 = 10.0;

/// Parameters of a single generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Side length of the square grid.
    pub size: usize,
    /// Divisor applied to cell coordinates before sampling noise.
    pub noise_scale: f64,
    /// Display resolution of a single tile, for the renderer only.
    pub resolution: u32,
    /// Seed for every random choice of the run. `None` draws from the OS.
    pub seed: Option<u64>,
    /// Draw a progress bar while traversing.
    pub show_progress: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            size: 50,
            noise_scale: 40.0,
            resolution: 10,
            seed: None,
            show_progress: false,
        }
    }
}

impl GenerationConfig {
    /// Config with the given size, scale and resolution, and defaults otherwise.
    pub fn new(size: usize, noise_scale: f64, resolution: u32) -> Self {
        Self {
            size,
            noise_scale,
            resolution,
            ..Self::default()
        }
    }

    /// Same config with a fixed seed.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// The noise scale actually used: scales of 1 or less fall back to 10.
    pub fn effective_scale(&self) -> f64 {
        if self.noise_scale <= 1.0 {
            FALLBACK_NOISE_SCALE
        } else {
            self.noise_scale
        }
    }

    /// Check the config describes a runnable grid.
    ///
    /// # Errors
    ///
    /// Fails when the grid size is zero or the noise scale is not finite.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            bail!("Grid size must be at least 1");
        }
        if !self.noise_scale.is_finite() {
            bail!("Noise scale must be finite, got {}", self.noise_scale);
        }
        Ok(())
    }

    /// Parse and validate a YAML config; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Fails on malformed YAML or when [`validate`](Self::validate) rejects the result.
    pub fn from_yaml(data: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(data).context("Invalid config YAML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML config file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or its contents are rejected by
    /// [`from_yaml`](Self::from_yaml).
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&data).with_context(|| format!("In config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_scales_fall_back() {
        assert_eq!(GenerationConfig::new(10, 1.0, 4).effective_scale(), 10.0);
        assert_eq!(GenerationConfig::new(10, -3.0, 4).effective_scale(), 10.0);
        assert_eq!(GenerationConfig::new(10, 1.5, 4).effective_scale(), 1.5);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = GenerationConfig::from_yaml("size: 12\nseed: 99\n").unwrap();
        assert_eq!(config.size, 12);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.noise_scale, GenerationConfig::default().noise_scale);
        assert!(!config.show_progress);
    }

    #[test]
    fn rejects_empty_grid() {
        assert!(GenerationConfig::from_yaml("size: 0").is_err());
        assert!(GenerationConfig::new(0, 20.0, 1).validate().is_err());
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let config = GenerationConfig::new(30, 25.0, 8).with_seed(4);
        std::fs::write(&path, serde_yaml::to_string(&config).unwrap()).unwrap();
        assert_eq!(GenerationConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GenerationConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(err.to_string().contains("absent.yaml"));
    }
}
