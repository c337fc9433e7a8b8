use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use christmas_tree::animation::advance;
use christmas_tree::cli::Cli;
use christmas_tree::config::SceneConfig;
use christmas_tree::frame::FrameClock;
use christmas_tree::render::{render_gif, render_png_sequence, timestamped_name, Renderer, SoftwareRenderer};
use christmas_tree::scene::Scene;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => SceneConfig::from_file(path)?,
        None => SceneConfig::default(),
    };
    let config = cli.apply_to(base);
    config.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut scene = Scene::build(&config, &mut rng)?;
    let mut renderer = SoftwareRenderer::new(cli.width, cli.height);

    if cli.live {
        return run_live(&mut scene, &mut renderer, &mut rng, &config, cli.frames);
    }

    if let Some(dir) = &cli.png_dir {
        render_png_sequence(&mut scene, &mut renderer, &mut rng, cli.frames, dir)?;
        return Ok(());
    }

    let path = cli
        .gif
        .unwrap_or_else(|| PathBuf::from(timestamped_name("christmas_tree", "gif")));
    render_gif(
        &mut scene,
        &mut renderer,
        &mut rng,
        cli.frames,
        config.interval_ms,
        &path,
    )
}

/// Timed driver loop: tick, mutate, render, repeat. One cycle covers
/// `frames` frames; the loop keeps going until interrupted.
fn run_live(
    scene: &mut Scene,
    renderer: &mut SoftwareRenderer,
    rng: &mut ChaCha8Rng,
    config: &SceneConfig,
    frames: u64,
) -> Result<()> {
    let frames = frames.max(1);
    let mut clock = FrameClock::new(Duration::from_millis(config.interval_ms));
    log::info!(
        "driving {} frames per cycle at {}ms per frame",
        frames,
        config.interval_ms
    );
    loop {
        let info = clock.tick();
        advance(scene, rng);
        // a display sink would consume this frame; here it is dropped
        let _ = renderer.render(scene)?;
        if info.number > 0 && info.number % frames == 0 {
            log::info!(
                "cycle complete at frame {} ({:.1} fps)",
                info.number,
                1.0 / info.delta.max(1e-6)
            );
        }
    }
}
