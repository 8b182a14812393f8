//! Evenly spaced color sets around the HSL hue circle.
//!
//! Color `i` of `n` sits at hue `360 * i / n` degrees with shared saturation
//! and lightness. Components are rounded to [`DIGITS`] decimal places.

use crate::color::{hsl_to_rgb, round_component, Hsl, Rgb};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};

/// Decimal places kept on every generated component.
pub const DIGITS: usize = 4;

/// Saturation used when none is given.
pub const DEFAULT_SATURATION: f64 = 0.75;

/// Lightness used when none is given.
pub const DEFAULT_LIGHTNESS: f64 = 0.5;

/// Inputs for one color set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadParams {
    pub count: usize,
    pub saturation: f64,
    pub lightness: f64,
}

impl Default for SpreadParams {
    fn default() -> Self {
        Self {
            count: 11,
            saturation: DEFAULT_SATURATION,
            lightness: DEFAULT_LIGHTNESS,
        }
    }
}

impl SpreadParams {
    pub fn new(count: usize, saturation: f64, lightness: f64) -> Self {
        Self {
            count,
            saturation,
            lightness,
        }
    }

    /// Rejects a zero count and saturation or lightness that is non-finite
    /// or outside [0, 1].
    pub fn validate(&self) -> Result<(), ColorError> {
        if self.count == 0 {
            return Err(ColorError::InvalidArgument(
                "count must be at least 1".to_string(),
            ));
        }
        check_unit("saturation", self.saturation)?;
        check_unit("lightness", self.lightness)?;
        Ok(())
    }

    /// Validates, then produces the color set.
    pub fn generate(&self) -> Result<Vec<Rgb>, ColorError> {
        self.validate()?;
        Ok((0..self.count)
            .map(|i| {
                // Hue passes through degrees so the fraction matches
                // `hue_degrees` to the last bit.
                let rgb = hsl_to_rgb(Hsl {
                    h: hue_degrees(i, self.count) / 360.0,
                    s: self.saturation,
                    l: self.lightness,
                });
                Rgb {
                    r: round_component(rgb.r, DIGITS),
                    g: round_component(rgb.g, DIGITS),
                    b: round_component(rgb.b, DIGITS),
                }
            })
            .collect())
    }
}

fn check_unit(name: &str, value: f64) -> Result<(), ColorError> {
    if !value.is_finite() {
        return Err(ColorError::InvalidArgument(format!(
            "{name} must be finite, got {value}"
        )));
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(ColorError::InvalidArgument(format!(
            "{name} must be within [0, 1], got {value}"
        )));
    }
    Ok(())
}

/// Generates `count` colors evenly spaced in hue.
///
/// Returns `ColorError::InvalidArgument` for a zero count or for saturation
/// or lightness that is non-finite or outside [0, 1].
pub fn generate_colors(
    count: usize,
    saturation: f64,
    lightness: f64,
) -> Result<Vec<Rgb>, ColorError> {
    SpreadParams::new(count, saturation, lightness).generate()
}

/// Hue in degrees of color `index` in a set of `count`.
pub fn hue_degrees(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    index as f64 / count as f64 * 360.0
}
