mod ground;
mod ornaments;
mod snow;
mod star;
mod starfield;
mod tree;

pub use ground::create_ground;
pub use ornaments::{create_ornaments, Ornaments, ORNAMENT_PALETTE};
pub use snow::{advance_snow, create_snow, SNOW_EXTENT, SNOW_FALL_STEP, SNOW_FLOOR, SNOW_TOP};
pub use star::{create_star, star_base_alphas, STAR_GLOW_ALPHA_RANGE};
pub use starfield::create_starfield;
pub use tree::{create_tree, tree_colors};
