use glam::Vec3;
use rand::Rng;

const FIELD_EXTENT: f32 = 10.0;
const FIELD_BOTTOM: f32 = 8.0;
const FIELD_TOP: f32 = 12.0;

/// Creates the static background starfield above the scene.
pub fn create_starfield(count: usize, rng: &mut impl Rng) -> (Vec<Vec3>, Vec<f32>) {
    let positions = (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-FIELD_EXTENT..FIELD_EXTENT),
                rng.gen_range(-FIELD_EXTENT..FIELD_EXTENT),
                rng.gen_range(FIELD_BOTTOM..FIELD_TOP),
            )
        })
        .collect();
    let sizes = (0..count).map(|_| rng.gen_range(1.0..3.0)).collect();
    (positions, sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_stars_sit_above_the_scene() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let (positions, sizes) = create_starfield(80, &mut rng);
        assert_eq!(positions.len(), 80);
        assert_eq!(sizes.len(), 80);
        for p in &positions {
            assert!(p.x.abs() <= FIELD_EXTENT);
            assert!(p.y.abs() <= FIELD_EXTENT);
            assert!(p.z >= FIELD_BOTTOM && p.z <= FIELD_TOP);
        }
    }
}
