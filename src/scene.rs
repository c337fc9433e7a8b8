use anyhow::Result;
use glam::Vec3;
use rand::Rng;

use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::generators::{
    create_ground, create_ornaments, create_snow, create_star, create_starfield, create_tree,
    star_base_alphas, tree_colors,
};
use crate::theme::{theme_by_name, Theme};
use crate::types::{PointCloud, Rgba, SceneBounds};

const TREE_POINT_SIZE: f32 = 4.0;
const GROUND_POINT_SIZE: f32 = 2.0;
const STAR_POINT_SIZE: f32 = 4.0;
const STAR_GOLD: Rgba = Rgba::opaque(1.0, 0.84, 0.0);
const WHITE: Rgba = Rgba::opaque(1.0, 1.0, 1.0);

/// Star topper with the unrotated coordinates and glow baseline the
/// per-frame rules derive the displayed state from.
#[derive(Clone, Debug)]
pub struct StarCloud {
    pub cloud: PointCloud,
    /// Original coordinates; rotation is always applied to these, never to
    /// the previous frame's output, so no error accumulates.
    pub base_positions: Vec<Vec3>,
    pub base_alphas: Vec<f32>,
    pub base_size: f32,
}

/// Complete renderable scene state. Owned by the animation driver, mutated
/// once per frame, read by the renderer.
#[derive(Clone, Debug)]
pub struct Scene {
    pub tree: PointCloud,
    pub ornaments: PointCloud,
    pub star: StarCloud,
    pub ground: PointCloud,
    pub snow: PointCloud,
    pub starfield: PointCloud,
    pub camera: Camera,
    pub bounds: SceneBounds,
    pub background: Rgba,
    pub label: String,
    pub label_color: Rgba,
    pub frame: u64,
}

impl Scene {
    /// Assembles a scene from a validated configuration and a seeded
    /// random source.
    pub fn build(config: &SceneConfig, rng: &mut impl Rng) -> Result<Self> {
        let theme = theme_by_name(&config.theme);

        let tree = build_tree(config.tree_count, &theme, rng);
        let ornaments = build_ornaments(&tree.positions, config.ornament_count, rng)?;
        let star = build_star(config, rng);
        let ground = build_ground(config.ground_count, &theme, rng);
        let snow = build_snow(config.snow_count, &theme, rng);
        let starfield = build_starfield(config.starfield_count, &theme, rng);

        let bounds = SceneBounds::new(Vec3::new(-5.0, -5.0, -2.0), Vec3::new(5.0, 5.0, 8.0));
        let scene = Self {
            tree,
            ornaments,
            star,
            ground,
            snow,
            starfield,
            camera: Camera::new(bounds.center()),
            bounds,
            background: theme.background,
            label: "Merry Christmas".to_string(),
            label_color: theme.text,
            frame: 0,
        };
        log::info!(
            "scene assembled: {} particles, theme {}",
            scene.total_particles(),
            theme.name
        );
        Ok(scene)
    }

    pub fn total_particles(&self) -> usize {
        self.tree.len()
            + self.ornaments.len()
            + self.star.cloud.len()
            + self.ground.len()
            + self.snow.len()
            + self.starfield.len()
    }

    /// Clouds in back-to-front draw order.
    pub fn clouds(&self) -> [&PointCloud; 6] {
        [
            &self.starfield,
            &self.ground,
            &self.tree,
            &self.ornaments,
            &self.star.cloud,
            &self.snow,
        ]
    }
}

fn build_tree(count: usize, theme: &Theme, rng: &mut impl Rng) -> PointCloud {
    let positions = create_tree(count, rng);
    let colors = tree_colors(&positions, theme);
    let mut cloud = PointCloud::uniform(positions, WHITE, TREE_POINT_SIZE);
    cloud.colors = colors;
    cloud.alpha = 0.9;
    cloud
}

fn build_ornaments(tree: &[Vec3], count: usize, rng: &mut impl Rng) -> Result<PointCloud> {
    let ornaments = create_ornaments(tree, count, rng)?;
    let mut cloud = PointCloud::uniform(ornaments.positions, WHITE, 0.0);
    cloud.colors = ornaments.colors;
    cloud.sizes = ornaments.sizes;
    cloud.alpha = 0.9;
    Ok(cloud)
}

fn build_star(config: &SceneConfig, rng: &mut impl Rng) -> StarCloud {
    let base_positions = create_star(
        config.star_count,
        config.star_scale,
        config.star_top_height,
        rng,
    );
    let base_alphas = star_base_alphas(&base_positions);
    let mut cloud = PointCloud::uniform(base_positions.clone(), STAR_GOLD, STAR_POINT_SIZE);
    cloud.colors = base_alphas
        .iter()
        .map(|&a| STAR_GOLD.with_alpha(a))
        .collect();
    StarCloud {
        cloud,
        base_positions,
        base_alphas,
        base_size: STAR_POINT_SIZE,
    }
}

fn build_ground(count: usize, theme: &Theme, rng: &mut impl Rng) -> PointCloud {
    let mut cloud = PointCloud::uniform(create_ground(count, rng), theme.ground, GROUND_POINT_SIZE);
    cloud.alpha = 0.7;
    cloud
}

fn build_snow(count: usize, theme: &Theme, rng: &mut impl Rng) -> PointCloud {
    let (positions, sizes) = create_snow(count, rng);
    let mut cloud = PointCloud::uniform(positions, theme.snow, 0.0);
    cloud.sizes = sizes;
    cloud.alpha = 0.8;
    cloud
}

fn build_starfield(count: usize, theme: &Theme, rng: &mut impl Rng) -> PointCloud {
    let (positions, sizes) = create_starfield(count, rng);
    let mut cloud = PointCloud::uniform(positions, theme.snow, 0.0);
    cloud.sizes = sizes;
    cloud.alpha = 0.6;
    cloud
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small_config() -> SceneConfig {
        SceneConfig {
            tree_count: 100,
            ground_count: 50,
            snow_count: 20,
            ornament_count: 10,
            star_count: 30,
            starfield_count: 8,
            ..SceneConfig::default()
        }
    }

    #[test]
    fn test_build_counts() {
        let config = small_config();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let scene = Scene::build(&config, &mut rng).unwrap();
        assert_eq!(scene.tree.len(), 100);
        assert_eq!(scene.ground.len(), 50);
        assert_eq!(scene.snow.len(), 20);
        assert_eq!(scene.ornaments.len(), 10);
        assert_eq!(scene.star.cloud.len(), 30);
        assert_eq!(scene.starfield.len(), 8);
        assert_eq!(scene.total_particles(), 218);
        assert_eq!(scene.frame, 0);
    }

    #[test]
    fn test_build_is_deterministic_for_a_seed() {
        let config = small_config();
        let mut rng_a = ChaCha8Rng::seed_from_u64(7);
        let mut rng_b = ChaCha8Rng::seed_from_u64(7);
        let a = Scene::build(&config, &mut rng_a).unwrap();
        let b = Scene::build(&config, &mut rng_b).unwrap();
        assert_eq!(a.tree.positions, b.tree.positions);
        assert_eq!(a.star.base_positions, b.star.base_positions);
        assert_eq!(a.snow.positions, b.snow.positions);
    }

    #[test]
    fn test_build_rejects_impossible_ornaments() {
        let config = SceneConfig {
            tree_count: 5,
            ornament_count: 6,
            ..small_config()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(Scene::build(&config, &mut rng).is_err());
    }

    #[test]
    fn test_theme_colors_reach_the_clouds() {
        let config = SceneConfig {
            theme: "winter-blue".to_string(),
            ..small_config()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let scene = Scene::build(&config, &mut rng).unwrap();
        let theme = theme_by_name("winter-blue");
        assert_eq!(scene.background, theme.background);
        assert_eq!(scene.snow.color, theme.snow);
        assert_eq!(scene.ground.color, theme.ground);
        assert_eq!(scene.label_color, theme.text);
    }

    #[test]
    fn test_star_cloud_starts_unrotated() {
        let config = small_config();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let scene = Scene::build(&config, &mut rng).unwrap();
        assert_eq!(scene.star.cloud.positions, scene.star.base_positions);
    }
}
