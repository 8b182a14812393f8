//! PNG output of a color wheel.
//!
//! This module is feature-gated behind `png` (default on) so that library
//! users who only need the pixel buffer do not pull in the `image` crate.
//! The buffer conversion itself lives in [`crate::pixel`] (always available).

use huewheel_core::{ColorError, Rgb};
use std::path::Path;
use tracing::{debug, info};

use crate::pixel::wheel_to_rgba;

/// Writes `colors` as a `size` x `size` PNG color wheel.
///
/// Returns `ColorError::InvalidArgument` for an empty color list or a size
/// outside `1..=MAX_SIZE`, or `ColorError::Io` on write failure.
pub fn write_png(colors: &[Rgb], size: usize, path: &Path) -> Result<(), ColorError> {
    debug!(count = colors.len(), size, "rasterizing color wheel");
    let rgba = wheel_to_rgba(colors, size)?;
    let side = u32::try_from(size)
        .map_err(|_| ColorError::InvalidArgument(format!("plot size {size} exceeds u32")))?;
    let img = image::RgbaImage::from_raw(side, side, rgba)
        .ok_or_else(|| ColorError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| ColorError::Io(e.to_string()))?;
    info!(path = %path.display(), "wrote color wheel");
    Ok(())
}
