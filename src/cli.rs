// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::SceneConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "christmas-tree")]
#[command(about = "Animated 3D Christmas tree particle scene", long_about = None)]
pub struct Cli {
    /// JSON scene configuration file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Theme: classic-green, winter-blue, warm-orange or mystic-purple
    #[arg(long)]
    pub theme: Option<String>,

    /// Seed for the scene's random source
    #[arg(long)]
    pub seed: Option<u64>,

    /// Tree particle count (1000-10000)
    #[arg(long)]
    pub tree: Option<usize>,

    /// Ground particle count (1000-8000)
    #[arg(long)]
    pub ground: Option<usize>,

    /// Snowflake count (500-3000)
    #[arg(long)]
    pub snow: Option<usize>,

    /// Ornament count (100-1000)
    #[arg(long)]
    pub ornaments: Option<usize>,

    /// Frame interval in milliseconds (10-100)
    #[arg(long)]
    pub interval: Option<u64>,

    /// Frames per animation cycle
    #[arg(long, default_value_t = 1000)]
    pub frames: u64,

    /// Write an animated GIF here instead of the default timestamped name
    #[arg(long)]
    pub gif: Option<PathBuf>,

    /// Write numbered PNG frames into this directory instead of a GIF
    #[arg(long)]
    pub png_dir: Option<PathBuf>,

    /// Drive the animation at the configured interval without exporting,
    /// logging progress; useful with an external display sink
    #[arg(long, default_value_t = false)]
    pub live: bool,

    /// Output image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Output image height in pixels
    #[arg(long, default_value_t = 960)]
    pub height: u32,
}

impl Cli {
    /// Folds the CLI overrides over the base configuration.
    pub fn apply_to(&self, mut config: SceneConfig) -> SceneConfig {
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(tree) = self.tree {
            config.tree_count = tree;
        }
        if let Some(ground) = self.ground {
            config.ground_count = ground;
        }
        if let Some(snow) = self.snow {
            config.snow_count = snow;
        }
        if let Some(ornaments) = self.ornaments {
            config.ornament_count = ornaments;
        }
        if let Some(interval) = self.interval {
            config.interval_ms = interval;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_fold_over_defaults() {
        let cli = Cli::parse_from([
            "christmas-tree",
            "--theme",
            "winter-blue",
            "--tree",
            "2000",
            "--seed",
            "7",
        ]);
        let config = cli.apply_to(SceneConfig::default());
        assert_eq!(config.theme, "winter-blue");
        assert_eq!(config.tree_count, 2_000);
        assert_eq!(config.seed, 7);
        assert_eq!(config.snow_count, SceneConfig::default().snow_count);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["christmas-tree"]);
        assert_eq!(cli.frames, 1_000);
        assert_eq!(cli.width, 800);
        assert_eq!(cli.height, 960);
        assert!(!cli.live);
    }
}
