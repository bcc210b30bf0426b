//! Conversion of rasterised snapshots into `image` buffers.

use crate::pixel::{sky_to_rgba, RenderConfig};
use boids_core::{BoidsError, Sky};
use image::RgbaImage;

/// Renders one snapshot as an RGBA image.
pub fn render_frame(sky: &Sky, config: &RenderConfig) -> Result<RgbaImage, BoidsError> {
    let rgba = sky_to_rgba(sky, config)?;
    let side = config.canvas_width;
    RgbaImage::from_raw(side, side, rgba)
        .ok_or_else(|| BoidsError::Io("RGBA buffer size mismatch".into()))
}

/// Renders every `frequency`-th snapshot.
pub fn render_frames(
    snapshots: &[Sky],
    config: &RenderConfig,
    frequency: usize,
) -> Result<Vec<RgbaImage>, BoidsError> {
    crate::select_snapshots(snapshots, frequency)?
        .map(|sky| render_frame(sky, config))
        .collect()
}
