use crate::error::Error;
use crate::point::{ControlPoint, Point};
use log::debug;
use rayon::prelude::*;

/// Minimum weight any control point contributes to any pixel. Keeps every
/// point visible across the whole surface and turns the linear falloff into
/// a softly bounded gradient instead of a hard cutoff.
pub const WEIGHT_FLOOR: f64 = 0.1;

/// Dense row-major RGBA8888 buffer, alpha fixed at 255. Fully overwritten
/// by every render, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA bytes of the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let index = ((y * self.width + x) * 4) as usize;
        let px = &self.data[index..index + 4];
        [px[0], px[1], px[2], px[3]]
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

fn weight(pixel: &Point, point: &ControlPoint, falloff_radius: f64) -> f64 {
    let distance = pixel.distance(&point.position);
    (1.0 - distance / falloff_radius).max(WEIGHT_FLOOR)
}

/// Blend the control points into a complete pixel buffer with floored-linear
/// inverse-distance weighting.
///
/// Every pixel averages all points, weighted by `max(0.1, 1 - d/falloff)`
/// where the falloff radius is half the longer surface dimension. Rows are
/// rasterized in parallel; the result only depends on the point set and the
/// pixel coordinates, so the buffer is identical for any thread count.
pub fn rasterize(points: &[ControlPoint], width: u32, height: u32) -> Result<PixelBuffer, Error> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    debug!(
        "Rasterize {}x{} surface from {} control points",
        width,
        height,
        points.len()
    );

    let falloff_radius = width.max(height) as f64 / 2.0;
    let row_stride = width as usize * 4;
    let mut data = vec![0; row_stride * height as usize];

    if points.is_empty() {
        // No anchors to average, leave the channels at zero but keep the
        // surface opaque like any other render.
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }

        return Ok(PixelBuffer {
            width,
            height,
            data,
        });
    }

    data.par_chunks_exact_mut(row_stride)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width as usize {
                let pixel = Point::new(x as f64, y as f64);

                let mut total_weight = 0.0;
                let (mut r, mut g, mut b) = (0.0, 0.0, 0.0);

                for point in points {
                    let weight = weight(&pixel, point, falloff_radius);

                    total_weight += weight;
                    r += weight * point.color.r as f64;
                    g += weight * point.color.g as f64;
                    b += weight * point.color.b as f64;
                }

                // total_weight is at least WEIGHT_FLOOR per point, so the
                // division never sees zero for a non-empty point set.
                row[x * 4] = (r / total_weight).min(255.0) as u8;
                row[x * 4 + 1] = (g / total_weight).min(255.0) as u8;
                row[x * 4 + 2] = (b / total_weight).min(255.0) as u8;
                row[x * 4 + 3] = 255;
            }
        });

    Ok(PixelBuffer {
        width,
        height,
        data,
    })
}
