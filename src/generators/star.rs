use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::math::triangle_point;

const OUTER_RADIUS: f32 = 1.0;
/// Inner-vertex radius of the golden-ratio five-pointed star
const INNER_RADIUS: f32 = 0.382;
/// Half-thickness of the depth band that gives the flat star its volume
const THICKNESS: f32 = 0.12;
const JITTER_SIGMA: f32 = 0.01;

/// Clip range applied to the star's glow alpha, both the precomputed base
/// and the flickered per-frame value.
pub const STAR_GLOW_ALPHA_RANGE: (f32, f32) = (0.2, 0.95);

/// Ten-vertex outline alternating outer and inner radii, in the vertical
/// (x, height) plane. Inner vertices sit 36 degrees past the outer ones.
fn star_outline() -> [Vec2; 10] {
    let mut vertices = [Vec2::ZERO; 10];
    for point in 0..5 {
        let outer_angle = point as f32 / 5.0 * TAU;
        let inner_angle = outer_angle + TAU / 10.0;
        vertices[2 * point] = Vec2::new(
            OUTER_RADIUS * outer_angle.cos(),
            OUTER_RADIUS * outer_angle.sin(),
        );
        vertices[2 * point + 1] = Vec2::new(
            INNER_RADIUS * inner_angle.cos(),
            INNER_RADIUS * inner_angle.sin(),
        );
    }
    vertices
}

/// Creates the solid star topper cloud anchored at the tree's apex.
///
/// Each sample picks a random outline edge and draws a point from the
/// triangle it forms with the star's center, then gets a depth coordinate
/// inside the thickness band. The cloud is scaled, jittered, and finally
/// translated so its lowest point sits exactly at `top_height`.
pub fn create_star(count: usize, scale: f32, top_height: f32, rng: &mut impl Rng) -> Vec<Vec3> {
    let outline = star_outline();

    let mut points: Vec<Vec3> = (0..count)
        .map(|_| {
            let edge = rng.gen_range(0..outline.len());
            let next = (edge + 1) % outline.len();
            let p = triangle_point(rng, Vec2::ZERO, outline[edge], outline[next]);
            let depth = rng.gen_range(-THICKNESS..THICKNESS);
            // outline spans x (horizontal) and z (height); y is depth
            Vec3::new(p.x, depth, p.y)
        })
        .collect();

    for p in &mut points {
        *p *= scale;
        p.x += rng.sample::<f32, _>(StandardNormal) * JITTER_SIGMA;
        p.y += rng.sample::<f32, _>(StandardNormal) * JITTER_SIGMA;
        p.z += rng.sample::<f32, _>(StandardNormal) * JITTER_SIGMA;
    }

    let min_z = points.iter().map(|p| p.z).fold(f32::INFINITY, f32::min);
    if min_z.is_finite() {
        for p in &mut points {
            p.z += top_height - min_z;
        }
    }
    points
}

/// Glow falloff: points near the cloud's geometric center are brightest,
/// fading with a Gaussian of sigma 0.5, clipped to the glow range.
pub fn star_base_alphas(points: &[Vec3]) -> Vec<f32> {
    if points.is_empty() {
        return Vec::new();
    }
    let center = points.iter().sum::<Vec3>() / points.len() as f32;
    let (lo, hi) = STAR_GLOW_ALPHA_RANGE;
    points
        .iter()
        .map(|p| {
            let d2 = (*p - center).length_squared();
            let alpha = 0.8 * (-d2 / (2.0 * 0.5 * 0.5)).exp() + 0.3;
            alpha.clamp(lo, hi)
        })
        .collect()
}
