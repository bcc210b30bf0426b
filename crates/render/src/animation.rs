//! Looping animated GIF output.

use crate::frame::render_frames;
use crate::pixel::RenderConfig;
use boids_core::{BoidsError, Sky};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

/// Display time of each frame.
const FRAME_DELAY_MS: u32 = 40;
/// NeuQuant sampling factor: 1 is best quality, 30 fastest.
const QUANTIZE_SPEED: i32 = 10;

/// Encodes every `frequency`-th snapshot as one frame of a looping GIF.
///
/// Returns the number of frames written.
pub fn write_gif(
    snapshots: &[Sky],
    config: &RenderConfig,
    frequency: usize,
    path: &Path,
) -> Result<usize, BoidsError> {
    let frames = render_frames(snapshots, config, frequency)?;
    let count = frames.len();
    debug!(frames = count, path = %path.display(), "encoding gif");

    let file = File::create(path).map_err(|e| BoidsError::Io(format!("{}: {e}", path.display())))?;
    let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), QUANTIZE_SPEED);
    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(|e| BoidsError::Io(e.to_string()))?;
    let delay = Delay::from_numer_denom_ms(FRAME_DELAY_MS, 1);
    encoder
        .encode_frames(frames.into_iter().map(|img| Frame::from_parts(img, 0, 0, delay)))
        .map_err(|e| BoidsError::Io(e.to_string()))?;
    Ok(count)
}
