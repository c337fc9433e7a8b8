use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Documented slider ranges from the interactive front-end. Counts outside
/// these ranges are tolerated with a warning so small test scenes remain
/// constructible; only impossible combinations are rejected.
pub const TREE_COUNT_RANGE: (usize, usize) = (1_000, 10_000);
pub const GROUND_COUNT_RANGE: (usize, usize) = (1_000, 8_000);
pub const SNOW_COUNT_RANGE: (usize, usize) = (500, 3_000);
pub const ORNAMENT_COUNT_RANGE: (usize, usize) = (100, 1_000);
pub const INTERVAL_MS_RANGE: (u64, u64) = (10, 100);

/// Flat configuration record for one scene.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Tree particle count, 1_000..=10_000
    pub tree_count: usize,
    /// Ground particle count, 1_000..=8_000
    pub ground_count: usize,
    /// Snowflake count, 500..=3_000
    pub snow_count: usize,
    /// Ornament ball count, 100..=1_000; must not exceed `tree_count`
    pub ornament_count: usize,
    /// Star topper particle count
    pub star_count: usize,
    /// Star topper scale factor
    pub star_scale: f32,
    /// Height at which the star topper's lowest point sits
    pub star_top_height: f32,
    /// Background star count
    pub starfield_count: usize,
    /// Frame interval in milliseconds, 10..=100
    pub interval_ms: u64,
    /// Theme name; unrecognized names fall back to classic green
    pub theme: String,
    /// Seed for the scene's random source; a fixed seed reproduces the
    /// scene and animation exactly
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tree_count: 6_000,
            ground_count: 3_500,
            snow_count: 1_500,
            ornament_count: 400,
            star_count: 800,
            star_scale: 0.7,
            star_top_height: 9.6,
            starfield_count: 80,
            interval_ms: 40,
            theme: "classic-green".to_string(),
            seed: 42,
        }
    }
}

impl SceneConfig {
    /// Loads a configuration from a JSON file. Missing fields take their
    /// defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Rejects impossible configurations and warns about out-of-range ones.
    pub fn validate(&self) -> Result<()> {
        if self.ornament_count > self.tree_count {
            bail!(
                "invalid configuration: ornament count {} exceeds tree particle count {}",
                self.ornament_count,
                self.tree_count
            );
        }
        warn_outside("tree count", self.tree_count, TREE_COUNT_RANGE);
        warn_outside("ground count", self.ground_count, GROUND_COUNT_RANGE);
        warn_outside("snow count", self.snow_count, SNOW_COUNT_RANGE);
        warn_outside("ornament count", self.ornament_count, ORNAMENT_COUNT_RANGE);
        warn_outside("interval", self.interval_ms, INTERVAL_MS_RANGE);
        Ok(())
    }
}

fn warn_outside<T: PartialOrd + std::fmt::Display>(what: &str, value: T, range: (T, T)) {
    if value < range.0 || value > range.1 {
        log::warn!(
            "{what} {value} is outside the recommended range {}..={}",
            range.0,
            range.1
        );
    }
}
