pub mod animation;
pub mod camera;
pub mod cli;
pub mod config;
pub mod frame;
pub mod generators;
pub mod math;
pub mod render;
pub mod scene;
pub mod theme;
pub mod types;

// Re-export the scene surface most callers need
pub use animation::{advance, apply_frame};
pub use config::SceneConfig;
pub use scene::Scene;
pub use theme::{theme_by_name, Theme};
pub use types::{PointCloud, Rgba, SceneBounds};
