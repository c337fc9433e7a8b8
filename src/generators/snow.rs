use glam::Vec3;
use rand::Rng;

/// Horizontal half-extent of the snow volume
pub const SNOW_EXTENT: f32 = 11.0;
/// Height a recycled flake restarts from
pub const SNOW_TOP: f32 = 12.0;
/// Height below which a flake is recycled
pub const SNOW_FLOOR: f32 = -2.0;
/// Height lost per frame
pub const SNOW_FALL_STEP: f32 = 0.07;

/// Creates the falling-snow volume: positions uniform in the bounding box,
/// sizes uniform in 3..5.
pub fn create_snow(count: usize, rng: &mut impl Rng) -> (Vec<Vec3>, Vec<f32>) {
    let positions = (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-SNOW_EXTENT..SNOW_EXTENT),
                rng.gen_range(-SNOW_EXTENT..SNOW_EXTENT),
                rng.gen_range(0.0..SNOW_TOP),
            )
        })
        .collect();
    let sizes = (0..count).map(|_| rng.gen_range(3.0..5.0)).collect();
    (positions, sizes)
}

/// Advances every flake one frame and recycles those that left the volume.
///
/// A flake falling below the floor restarts at the top with a fresh
/// horizontal position. One pass over the slice handles every crossing in
/// the same frame.
pub fn advance_snow(positions: &mut [Vec3], rng: &mut impl Rng) {
    for p in positions {
        p.z -= SNOW_FALL_STEP;
        if p.z < SNOW_FLOOR {
            p.z = SNOW_TOP;
            p.x = rng.gen_range(-SNOW_EXTENT..SNOW_EXTENT);
            p.y = rng.gen_range(-SNOW_EXTENT..SNOW_EXTENT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_initial_volume() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let (positions, sizes) = create_snow(1_000, &mut rng);
        assert_eq!(positions.len(), 1_000);
        assert_eq!(sizes.len(), 1_000);
        for p in &positions {
            assert!(p.x.abs() <= SNOW_EXTENT);
            assert!(p.y.abs() <= SNOW_EXTENT);
            assert!(p.z >= 0.0 && p.z <= SNOW_TOP);
        }
        for s in &sizes {
            assert!((3.0..5.0).contains(s));
        }
    }

    #[test]
    fn test_heights_stay_in_band_forever() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let (mut positions, _) = create_snow(200, &mut rng);
        // 500 steps is more than two full falls through the volume
        for _ in 0..500 {
            advance_snow(&mut positions, &mut rng);
            for p in &positions {
                assert!(
                    p.z >= SNOW_FLOOR && p.z <= SNOW_TOP,
                    "flake at {} escaped the band",
                    p.z
                );
            }
        }
    }

    #[test]
    fn test_crossing_flake_restarts_at_the_top() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut positions = vec![Vec3::new(1.0, 2.0, SNOW_FLOOR + 0.01)];
        advance_snow(&mut positions, &mut rng);
        assert_eq!(positions[0].z, SNOW_TOP);
        // horizontal position was re-rolled inside the volume
        assert!(positions[0].x.abs() <= SNOW_EXTENT);
        assert!(positions[0].y.abs() <= SNOW_EXTENT);
    }

    #[test]
    fn test_flake_above_floor_just_falls() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut positions = vec![Vec3::new(1.0, 2.0, 5.0)];
        advance_snow(&mut positions, &mut rng);
        assert!((positions[0].z - (5.0 - SNOW_FALL_STEP)).abs() < 1e-6);
        assert_eq!(positions[0].x, 1.0);
        assert_eq!(positions[0].y, 2.0);
    }
}
