mod color;
mod rotation;
mod sampling;

pub use color::lerp_rgb;
pub use rotation::{rotate_about_z, rotation_z_deg};
pub use sampling::{disc_radius, triangle_point};
