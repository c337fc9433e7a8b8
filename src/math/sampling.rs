use glam::Vec2;
use rand::Rng;

/// Uniform point inside the triangle (a, b, c).
///
/// Uses the parallelogram-reflection method: draw (u, v) in the unit
/// square and fold samples past the diagonal back into the triangle.
pub fn triangle_point(rng: &mut impl Rng, a: Vec2, b: Vec2, c: Vec2) -> Vec2 {
    let mut u: f32 = rng.gen();
    let mut v: f32 = rng.gen();
    if u + v > 1.0 {
        u = 1.0 - u;
        v = 1.0 - v;
    }
    a + u * (b - a) + v * (c - a)
}

/// Radius sample for uniform area density over a disc.
///
/// Drawing the radius as sqrt of a uniform compensates for the ring
/// circumference growing with r; a plain uniform radius would pile
/// points up near the center.
pub fn disc_radius(rng: &mut impl Rng, radius: f32) -> f32 {
    rng.gen::<f32>().sqrt() * radius
}
