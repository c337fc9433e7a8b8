mod export;
mod software;

use anyhow::Result;
use image::RgbaImage;

use crate::scene::Scene;

pub use export::{render_gif, render_png_sequence, timestamped_name};
pub use software::SoftwareRenderer;

/// Rendering collaborator: consumes an immutable scene snapshot and
/// produces one visual frame.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> Result<RgbaImage>;
}
