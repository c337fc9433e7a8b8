use rand::Rng;

use crate::camera::{DEFAULT_AZIMUTH, DEFAULT_ELEVATION};
use crate::generators::{advance_snow, STAR_GLOW_ALPHA_RANGE};
use crate::math::{rotate_about_z, rotation_z_deg};
use crate::scene::Scene;

/// Degrees the star turns per frame
const STAR_SPIN_DEG_PER_FRAME: f32 = 0.1;
const AZIMUTH_DRIFT_PER_FRAME: f32 = 0.08;

/// Advances the scene by one frame: applies the rules for the current
/// frame index, then increments the counter. Callable indefinitely.
pub fn advance(scene: &mut Scene, rng: &mut impl Rng) {
    apply_frame(scene, scene.frame, rng);
    scene.frame += 1;
}

/// Applies every per-frame rule for frame index `frame` to the scene.
///
/// Each rule is an absolute function of the frame index, so the scene can
/// be fast-forwarded to any frame directly; only the snow advance carries
/// state from step to step.
pub fn apply_frame(scene: &mut Scene, frame: u64, rng: &mut impl Rng) {
    let f = frame as f32;

    advance_snow(&mut scene.snow.positions, rng);

    scene.tree.alpha = 0.85 + 0.1 * (0.2 * f).sin();

    // the star rotates from its original coordinates every frame; rotating
    // the previous frame's output instead would accumulate drift
    let rotation = rotation_z_deg(STAR_SPIN_DEG_PER_FRAME * f);
    rotate_about_z(
        &rotation,
        &scene.star.base_positions,
        &mut scene.star.cloud.positions,
    );

    scene.star.cloud.size = scene.star.base_size * (0.9 + 0.1 * (0.15 * f).sin());

    let flicker = 0.7 + 0.3 * (0.12 * f).sin();
    let (lo, hi) = STAR_GLOW_ALPHA_RANGE;
    for (color, &base) in scene
        .star
        .cloud
        .colors
        .iter_mut()
        .zip(&scene.star.base_alphas)
    {
        color.a = (base * flicker).clamp(lo, hi);
    }

    scene.ornaments.alpha = 0.8 + 0.2 * (0.25 * f).sin();

    scene.camera.elevation = DEFAULT_ELEVATION + 1.5 * (0.04 * f).sin();
    scene.camera.azimuth = DEFAULT_AZIMUTH + AZIMUTH_DRIFT_PER_FRAME * f;
}
