use glam::Vec3;

pub const DEFAULT_ELEVATION: f32 = 25.0;
pub const DEFAULT_AZIMUTH: f32 = -30.0;
const DEFAULT_DISTANCE: f32 = 24.0;

/// Orbital camera circling the scene center.
///
/// Pose is elevation/azimuth in degrees. The azimuth drifts monotonically
/// during animation and is never wrapped; sine and cosine take care of the
/// periodicity.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub elevation: f32,
    pub azimuth: f32,
    pub distance: f32,
    pub target: Vec3,
}

impl Camera {
    pub fn new(target: Vec3) -> Self {
        Self {
            elevation: DEFAULT_ELEVATION,
            azimuth: DEFAULT_AZIMUTH,
            distance: DEFAULT_DISTANCE,
            target,
        }
    }

    /// World-space eye position for the current pose.
    pub fn position(&self) -> Vec3 {
        let elevation = self.elevation.to_radians();
        let azimuth = self.azimuth.to_radians();
        self.target
            + self.distance
                * Vec3::new(
                    elevation.cos() * azimuth.cos(),
                    elevation.cos() * azimuth.sin(),
                    elevation.sin(),
                )
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position()).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Z).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}
