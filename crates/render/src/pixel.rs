//! Pure-computation RGBA rasterization of a color wheel.
//!
//! Each color becomes an equal wedge of a disk. Wedge `i` of `n` is centered
//! on angle `2*pi*i/n`, with angle zero pointing right and angles increasing
//! counter-clockwise. Pixels outside the inscribed disk are transparent.

use huewheel_core::{ColorError, Rgb};
use std::f64::consts::TAU;

/// Largest accepted edge length in pixels.
pub const MAX_SIZE: usize = 8192;

/// Rejects a zero edge length or one above [`MAX_SIZE`].
pub fn check_size(size: usize) -> Result<(), ColorError> {
    if size == 0 {
        return Err(ColorError::InvalidArgument(
            "plot size must be non-zero".to_string(),
        ));
    }
    if size > MAX_SIZE {
        return Err(ColorError::InvalidArgument(format!(
            "plot size {size} exceeds the maximum of {MAX_SIZE}"
        )));
    }
    Ok(())
}

/// Index of the wedge containing `angle` (radians) in a wheel of `count` wedges.
///
/// Angles outside [0, 2*pi) wrap. Returns 0 when `count` is zero.
pub fn wedge_index(angle: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let width = TAU / count as f64;
    let shifted = (angle + width / 2.0).rem_euclid(TAU);
    ((shifted / width) as usize) % count
}

/// Rasterizes `colors` as a `size` x `size` wheel into an RGBA8 buffer.
///
/// The buffer length is `size * size * 4`. Returns
/// `ColorError::InvalidArgument` for an empty color list or a size rejected
/// by [`check_size`].
pub fn wheel_to_rgba(colors: &[Rgb], size: usize) -> Result<Vec<u8>, ColorError> {
    if colors.is_empty() {
        return Err(ColorError::InvalidArgument(
            "cannot plot an empty color set".to_string(),
        ));
    }
    check_size(size)?;
    let len = size * size * 4;

    let swatches: Vec<[u8; 3]> = colors.iter().map(|c| c.to_rgb8()).collect();
    let center = size as f64 / 2.0;
    let radius_sq = center * center;

    let mut buf = Vec::with_capacity(len);
    for y in 0..size {
        let dy = center - (y as f64 + 0.5);
        for x in 0..size {
            let dx = (x as f64 + 0.5) - center;
            if dx * dx + dy * dy > radius_sq {
                buf.extend_from_slice(&[0, 0, 0, 0]);
                continue;
            }
            let [r, g, b] = swatches[wedge_index(dy.atan2(dx), swatches.len())];
            buf.extend_from_slice(&[r, g, b, 255]);
        }
    }
    Ok(buf)
}
