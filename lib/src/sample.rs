use crate::color::Color;
use crate::point::{ControlPoint, Point};
use rand::Rng;

/// Scatter `points_per_color` control points for every base color, with
/// positions drawn i.i.d. uniformly over the surface. No spacing constraint
/// is applied; the rasterizer's weight floor keeps clusters from punching
/// holes into the gradient.
///
/// The caller owns the randomness: pass a seeded rng for a reproducible
/// layout or `thread_rng()` for a fresh one.
pub fn sample_points<R: Rng>(
    colors: &[Color],
    points_per_color: u32,
    width: u32,
    height: u32,
    rng: &mut R,
) -> Vec<ControlPoint> {
    let mut points = Vec::with_capacity(colors.len() * points_per_color as usize);

    for &color in colors {
        for _ in 0..points_per_color {
            let x = rng.gen::<f64>() * width as f64;
            let y = rng.gen::<f64>() * height as f64;
            points.push(ControlPoint::new(Point::new(x, y), color));
        }
    }

    points
}
