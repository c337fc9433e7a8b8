use glam::Vec3;

/// RGBA color with components in [0, 1]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// One visual element of the scene: an ordered set of particle positions
/// with optional per-point colors and sizes.
///
/// `colors`/`sizes` left empty mean the uniform `color`/`size` applies to
/// every point. `alpha` is a whole-cloud opacity multiplied on top of the
/// per-point alpha; the animation rules drive it for the tree and ornaments.
#[derive(Clone, Debug)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Rgba>,
    pub sizes: Vec<f32>,
    pub color: Rgba,
    pub size: f32,
    pub alpha: f32,
}

impl PointCloud {
    /// Cloud where every point shares one color and size.
    pub fn uniform(positions: Vec<Vec3>, color: Rgba, size: f32) -> Self {
        Self {
            positions,
            colors: Vec::new(),
            sizes: Vec::new(),
            color,
            size,
            alpha: 1.0,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn color_at(&self, index: usize) -> Rgba {
        self.colors.get(index).copied().unwrap_or(self.color)
    }

    pub fn size_at(&self, index: usize) -> f32 {
        self.sizes.get(index).copied().unwrap_or(self.size)
    }

    pub fn centroid(&self) -> Vec3 {
        if self.positions.is_empty() {
            return Vec3::ZERO;
        }
        self.positions.iter().sum::<Vec3>() / self.positions.len() as f32
    }
}

/// Axis-aligned viewport bounds of the scene (x, y horizontal, z up)
#[derive(Copy, Clone, Debug)]
pub struct SceneBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl SceneBounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }
}
