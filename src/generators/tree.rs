use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::math::lerp_rgb;
use crate::theme::Theme;
use crate::types::Rgba;

/// Creates the cone-shaped tree cloud.
///
/// Height fraction is uniform; the radius shrinks as (1-z)^1.5 toward the
/// top with a little jitter for a fluffy surface. Heights span -0.5..9.5.
pub fn create_tree(count: usize, rng: &mut impl Rng) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let z = rng.gen_range(0.0f32..1.0);
            let radius = (1.0 - z).powf(1.5) * 3.5 + rng.gen::<f32>() * 0.4;
            let theta = rng.gen_range(0.0..TAU);
            Vec3::new(
                radius * theta.cos() + (rng.gen::<f32>() - 0.5) * 0.2,
                radius * theta.sin() + (rng.gen::<f32>() - 0.5) * 0.2,
                z * 10.0 - 0.5,
            )
        })
        .collect()
}

/// Per-point green gradient by normalized height, from the theme's base
/// color at the bottom to its tip color at the top.
pub fn tree_colors(positions: &[Vec3], theme: &Theme) -> Vec<Rgba> {
    let (min_z, max_z) = positions.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.z), hi.max(p.z))
    });
    let span = max_z - min_z;
    positions
        .iter()
        .map(|p| {
            let t = if span > 0.0 { (p.z - min_z) / span } else { 0.0 };
            let [r, g, b] = lerp_rgb(theme.tree_base, theme.tree_tip, t);
            Rgba::opaque(r, g, b)
        })
        .collect()
}
