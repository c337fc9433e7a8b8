use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::math::disc_radius;

const GROUND_RADIUS: f32 = 8.0;

/// Creates the undulating ground disc under the tree.
///
/// Points are uniform in area over a disc of radius 8; the height is a
/// deterministic sum of two waves over radius and angle, offset down by 1.
pub fn create_ground(count: usize, rng: &mut impl Rng) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let r = disc_radius(rng, GROUND_RADIUS);
            let theta = rng.gen_range(0.0..TAU);
            let wave1 = (r * 1.2).sin() * 0.2;
            let wave2 = (theta * 3.0 + r * 1.5).sin() * 0.1;
            Vec3::new(r * theta.cos(), r * theta.sin(), wave1 + wave2 - 1.0)
        })
        .collect()
}
