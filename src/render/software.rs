use anyhow::Result;
use glam::Vec3;
use image::{Rgba as ImageRgba, RgbaImage};

use crate::scene::Scene;
use crate::types::Rgba;

use super::Renderer;

const FOV_DEG: f32 = 30.0;
const NEAR_PLANE: f32 = 0.1;

/// CPU point-splat renderer.
///
/// Projects every cloud through the orbital camera, sorts the points far
/// to near, and alpha-blends a filled disc per particle over the theme
/// background. Good enough for headless export and tests; a GPU renderer
/// can plug into the same trait.
pub struct SoftwareRenderer {
    width: u32,
    height: u32,
    splats: Vec<Splat>,
}

struct Splat {
    depth: f32,
    x: f32,
    y: f32,
    radius: f32,
    color: Rgba,
}

impl SoftwareRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            splats: Vec::new(),
        }
    }

    fn project(&mut self, scene: &Scene) {
        self.splats.clear();

        let eye = scene.camera.position();
        let forward = scene.camera.forward();
        let right = scene.camera.right();
        let up = scene.camera.up();
        let focal = 0.5 * self.height as f32 / (FOV_DEG.to_radians() * 0.5).tan();
        // marker sizes are areas in display points; scale their screen
        // footprint with the vertical resolution
        let size_scale = self.height as f32 / 960.0;

        for cloud in scene.clouds() {
            for (index, p) in cloud.positions.iter().enumerate() {
                let v: Vec3 = *p - eye;
                let depth = v.dot(forward);
                if depth <= NEAR_PLANE {
                    continue;
                }
                let x = v.dot(right) / depth * focal + self.width as f32 * 0.5;
                let y = self.height as f32 * 0.5 - v.dot(up) / depth * focal;

                let mut color = cloud.color_at(index);
                color.a *= cloud.alpha;
                let radius = (cloud.size_at(index).sqrt() * 0.75 * size_scale).max(0.5);
                self.splats.push(Splat {
                    depth,
                    x,
                    y,
                    radius,
                    color,
                });
            }
        }

        // painter's order: farthest first
        self.splats
            .sort_by(|a, b| b.depth.partial_cmp(&a.depth).unwrap_or(std::cmp::Ordering::Equal));
    }
}

impl Renderer for SoftwareRenderer {
    fn render(&mut self, scene: &Scene) -> Result<RgbaImage> {
        self.project(scene);

        let background = to_pixel(scene.background);
        let mut image = RgbaImage::from_pixel(self.width, self.height, background);

        for splat in &self.splats {
            blend_disc(&mut image, splat);
        }
        Ok(image)
    }
}

fn blend_disc(image: &mut RgbaImage, splat: &Splat) {
    let (width, height) = image.dimensions();
    let r = splat.radius;
    let min_x = (splat.x - r).floor().max(0.0) as u32;
    let max_x = (splat.x + r).ceil().min(width as f32 - 1.0) as u32;
    let min_y = (splat.y - r).floor().max(0.0) as u32;
    let max_y = (splat.y + r).ceil().min(height as f32 - 1.0) as u32;
    if splat.x + r < 0.0 || splat.y + r < 0.0 || min_x > max_x || min_y > max_y {
        return;
    }

    let alpha = splat.color.a.clamp(0.0, 1.0);
    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let dx = px as f32 + 0.5 - splat.x;
            let dy = py as f32 + 0.5 - splat.y;
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let pixel = image.get_pixel_mut(px, py);
            for (channel, source) in [splat.color.r, splat.color.g, splat.color.b]
                .into_iter()
                .enumerate()
            {
                let dst = pixel.0[channel] as f32 / 255.0;
                let blended = source * alpha + dst * (1.0 - alpha);
                pixel.0[channel] = (blended * 255.0).round() as u8;
            }
            pixel.0[3] = 255;
        }
    }
}

fn to_pixel(color: Rgba) -> ImageRgba<u8> {
    ImageRgba([
        (color.r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (color.g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (color.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        255,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use crate::scene::Scene;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn tiny_scene() -> Scene {
        let config = SceneConfig {
            tree_count: 200,
            ground_count: 80,
            snow_count: 40,
            ornament_count: 20,
            star_count: 60,
            starfield_count: 10,
            ..SceneConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        Scene::build(&config, &mut rng).unwrap()
    }

    #[test]
    fn test_frame_has_scene_content() {
        let scene = tiny_scene();
        let mut renderer = SoftwareRenderer::new(64, 64);
        let image = renderer.render(&scene).unwrap();
        assert_eq!(image.dimensions(), (64, 64));

        let background = to_pixel(scene.background);
        let touched = image.pixels().filter(|p| **p != background).count();
        assert!(touched > 0, "nothing was drawn over the background");
    }

    #[test]
    fn test_empty_scene_is_all_background() {
        let config = SceneConfig {
            tree_count: 0,
            ground_count: 0,
            snow_count: 0,
            ornament_count: 0,
            star_count: 0,
            starfield_count: 0,
            ..SceneConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let scene = Scene::build(&config, &mut rng).unwrap();
        let mut renderer = SoftwareRenderer::new(32, 32);
        let image = renderer.render(&scene).unwrap();
        let background = to_pixel(scene.background);
        assert!(image.pixels().all(|p| *p == background));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let scene = tiny_scene();
        let mut renderer = SoftwareRenderer::new(48, 48);
        let a = renderer.render(&scene).unwrap();
        let b = renderer.render(&scene).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
