use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};
use rand::Rng;

use crate::animation::advance;
use crate::scene::Scene;

use super::Renderer;

/// Output name carrying the local wall-clock time, e.g.
/// `christmas_tree_20261224_180000.gif`.
pub fn timestamped_name(prefix: &str, extension: &str) -> String {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("{prefix}_{stamp}.{extension}")
}

/// Renders `frames` animation steps into an animated GIF that loops
/// forever. The configured frame interval becomes the GIF frame delay.
pub fn render_gif(
    scene: &mut Scene,
    renderer: &mut impl Renderer,
    rng: &mut impl Rng,
    frames: u64,
    interval_ms: u64,
    path: &Path,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder.set_repeat(Repeat::Infinite).context("gif repeat")?;

    let delay = Delay::from_numer_denom_ms(interval_ms as u32, 1);
    for frame in 0..frames {
        let image = renderer.render(scene)?;
        encoder
            .encode_frame(Frame::from_parts(image, 0, 0, delay))
            .with_context(|| format!("failed to encode frame {frame}"))?;
        advance(scene, rng);
        if frame > 0 && frame % 100 == 0 {
            log::info!("encoded {frame}/{frames} frames");
        }
    }
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Renders `frames` animation steps as numbered PNG files in `dir`.
pub fn render_png_sequence(
    scene: &mut Scene,
    renderer: &mut impl Renderer,
    rng: &mut impl Rng,
    frames: u64,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let mut paths = Vec::with_capacity(frames as usize);
    for frame in 0..frames {
        let image = renderer.render(scene)?;
        let path = dir.join(format!("frame_{frame:04}.png"));
        image
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        paths.push(path);
        advance(scene, rng);
    }
    log::info!("wrote {} frames to {}", paths.len(), dir.display());
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use crate::render::SoftwareRenderer;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_timestamped_name_shape() {
        let name = timestamped_name("christmas_tree", "gif");
        assert!(name.starts_with("christmas_tree_"));
        assert!(name.ends_with(".gif"));
        // prefix + underscore + yyyymmdd + underscore + hhmmss + extension
        assert_eq!(name.len(), "christmas_tree_".len() + 15 + ".gif".len());
    }

    #[test]
    fn test_png_sequence_writes_every_frame() {
        let config = SceneConfig {
            tree_count: 50,
            ground_count: 20,
            snow_count: 10,
            ornament_count: 5,
            star_count: 10,
            starfield_count: 4,
            ..SceneConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut scene = Scene::build(&config, &mut rng).unwrap();
        let mut renderer = SoftwareRenderer::new(16, 16);

        let dir = std::env::temp_dir().join(format!("tree_frames_{}", std::process::id()));
        let paths =
            render_png_sequence(&mut scene, &mut renderer, &mut rng, 3, &dir).unwrap();
        assert_eq!(paths.len(), 3);
        for path in &paths {
            assert!(path.exists());
        }
        assert_eq!(scene.frame, 3);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
