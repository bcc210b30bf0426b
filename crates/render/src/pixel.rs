//! Pure-computation rasterisation of a [`Sky`] into an RGBA8 buffer.
//!
//! Always available (no feature gate) so the PNG and GIF paths share the same
//! drawing code.

use boids_core::{BoidsError, Sky, Srgb};

const DEFAULT_CANVAS_WIDTH: u32 = 2000;
const DEFAULT_BOID_SIZE: f64 = 5.0;

/// How snapshots are drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Side length of the square output image in pixels.
    pub canvas_width: u32,
    /// Radius of each boid disc in pixels.
    pub boid_size: f64,
    pub boid_color: Srgb,
    pub background: Srgb,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            boid_size: DEFAULT_BOID_SIZE,
            boid_color: Srgb::WHITE,
            background: Srgb::from_rgb8(173, 216, 230),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), BoidsError> {
        if self.canvas_width == 0 {
            return Err(BoidsError::InvalidCanvasWidth);
        }
        Ok(())
    }
}

/// Draws every boid of `sky` as a filled disc on a square canvas.
///
/// Sky coordinates `[0, width)` map linearly onto `[0, canvas_width)` pixels.
/// Discs are clipped at the canvas edge. The buffer length is
/// `canvas_width² * 4`.
pub fn sky_to_rgba(sky: &Sky, config: &RenderConfig) -> Result<Vec<u8>, BoidsError> {
    config.validate()?;
    let side = config.canvas_width as usize;
    let mut buf = config.background.to_rgba8().repeat(side * side);
    let fill = config.boid_color.to_rgba8();
    let scale = config.canvas_width as f64 / sky.width;
    let r = config.boid_size.max(0.0);

    for boid in &sky.boids {
        let cx = boid.position.x * scale;
        let cy = boid.position.y * scale;
        let (x0, x1) = pixel_span(cx, r, side);
        let (y0, y1) = pixel_span(cy, r, side);
        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    let i = (py * side + px) * 4;
                    buf[i..i + 4].copy_from_slice(&fill);
                }
            }
        }
    }
    Ok(buf)
}

/// Half-open pixel range covering `[center - r, center + r]`, clipped to the
/// canvas.
fn pixel_span(center: f64, r: f64, side: usize) -> (usize, usize) {
    let lo = (center - r).floor().max(0.0) as usize;
    let hi = ((center + r).ceil().max(0.0) as usize).min(side);
    (lo.min(side), hi)
}
