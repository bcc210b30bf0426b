//! Single-frame PNG output.

use crate::frame::render_frame;
use crate::pixel::RenderConfig;
use boids_core::{BoidsError, Sky};
use std::path::Path;

/// Writes one snapshot as a PNG image.
///
/// Returns `BoidsError::Io` on write failure.
pub fn write_png(sky: &Sky, config: &RenderConfig, path: &Path) -> Result<(), BoidsError> {
    let img = render_frame(sky, config)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| BoidsError::Io(e.to_string()))
}
