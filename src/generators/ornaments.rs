use anyhow::{bail, Result};
use glam::Vec3;
use rand::seq::index::sample;
use rand::Rng;

use crate::types::Rgba;

/// Fixed ornament palette
pub const ORNAMENT_PALETTE: [Rgba; 6] = [
    Rgba::opaque(1.0, 107.0 / 255.0, 107.0 / 255.0),           // #FF6B6B
    Rgba::opaque(1.0, 217.0 / 255.0, 61.0 / 255.0),            // #FFD93D
    Rgba::opaque(78.0 / 255.0, 205.0 / 255.0, 196.0 / 255.0),  // #4ECDC4
    Rgba::opaque(199.0 / 255.0, 199.0 / 255.0, 199.0 / 255.0), // #C7C7C7
    Rgba::opaque(1.0, 105.0 / 255.0, 180.0 / 255.0),           // #FF69B4
    Rgba::opaque(152.0 / 255.0, 251.0 / 255.0, 152.0 / 255.0), // #98FB98
];

const OUTWARD_SCALE: f32 = 1.1;

/// Ornament balls hung on the tree.
#[derive(Clone, Debug)]
pub struct Ornaments {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Rgba>,
    pub sizes: Vec<f32>,
}

/// Picks `count` distinct tree particles and pushes them slightly outward
/// in the horizontal plane, keeping their height. Each ornament gets a
/// palette color and a size in 10..18.
///
/// Fails when `count` exceeds the tree cloud (sampling without
/// replacement from a smaller population).
pub fn create_ornaments(
    tree: &[Vec3],
    count: usize,
    rng: &mut impl Rng,
) -> Result<Ornaments> {
    if count > tree.len() {
        bail!(
            "invalid configuration: {count} ornaments requested from a tree of {} particles",
            tree.len()
        );
    }

    let mut positions = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);
    let mut sizes = Vec::with_capacity(count);
    for index in sample(rng, tree.len(), count) {
        let p = tree[index];
        positions.push(Vec3::new(p.x * OUTWARD_SCALE, p.y * OUTWARD_SCALE, p.z));
        colors.push(ORNAMENT_PALETTE[rng.gen_range(0..ORNAMENT_PALETTE.len())]);
        sizes.push(rng.gen_range(10.0..18.0));
    }

    Ok(Ornaments {
        positions,
        colors,
        sizes,
    })
}
