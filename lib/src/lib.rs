pub mod color;
pub mod config;
pub mod error;
pub mod point;
pub mod raster;
pub mod sample;

pub use color::Color;
pub use config::{MeshConfig, SurfacePreset};
pub use error::Error;
pub use point::{ControlPoint, Point};
pub use raster::PixelBuffer;

use rand::Rng;

/// Render one gradient mesh: scatter control points for the configured
/// palette, then blend them into a fresh pixel buffer.
///
/// Returns `Ok(None)` when fewer than two base colors are configured, since
/// a blend needs at least two sources; the caller keeps whatever it was
/// displaying before.
pub fn render<R: Rng>(config: &MeshConfig, rng: &mut R) -> Result<Option<PixelBuffer>, Error> {
    if config.base_colors.len() < 2 {
        return Ok(None);
    }

    if config.width == 0 || config.height == 0 {
        return Err(Error::InvalidDimensions {
            width: config.width,
            height: config.height,
        });
    }

    let points = sample::sample_points(
        &config.base_colors,
        config.points_per_color,
        config.width,
        config.height,
        rng,
    );

    raster::rasterize(&points, config.width, config.height).map(Some)
}
