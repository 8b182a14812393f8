//! Color types and the HSL to RGB conversion.
//!
//! Provides `Hsl` (hue stored as a fraction of a full turn) and `Rgb`
//! (components in [0, 1]) plus the pure conversion between them. Uses `f64`
//! throughout.

use serde::{Deserialize, Serialize};
use std::fmt;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// HSL color. `h` is a fraction of a full turn in [0, 1); `s` and `l` are in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    /// Converts the color to a hex string like `"#rrggbb"`.
    ///
    /// Components are clamped, then quantized to 8-bit with rounding.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Quantizes the color to three bytes.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

/// Writes `r, g, b` with each component in shortest round-trip form,
/// always keeping a fractional digit (`1.0`, `0.875`).
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}, {:?}, {:?}", self.r, self.g, self.b)
    }
}

/// Rounds `value` to `digits` decimal places.
///
/// Rounding is decided on the exact binary value, ties to even, and the
/// result is the nearest `f64` to the rounded decimal. Scaling by a power
/// of ten first would turn values such as 0.00025 (just above the tie) into
/// exact ties.
pub fn round_component(value: f64, digits: usize) -> f64 {
    format!("{value:.digits$}").parse().unwrap_or(value)
}

/// One channel of the two-level HSL formula: ramps up over the first
/// sixth of a turn, holds `high` to one half, ramps down to two thirds.
fn channel(low: f64, high: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        low + (high - low) * hue * 6.0
    } else if hue < 0.5 {
        high
    } else if hue < TWO_THIRDS {
        low + (high - low) * (TWO_THIRDS - hue) * 6.0
    } else {
        low
    }
}

/// Converts HSL to RGB.
///
/// Uses the two-level form of the standard conversion: `high` is the
/// brightest channel value, `low = 2l - high`, and each channel is read at
/// the hue shifted by a third of a turn. Hue fractions outside [0, 1) wrap.
/// Output components are clamped to [0, 1].
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    if c.s == 0.0 {
        let l = c.l.clamp(0.0, 1.0);
        return Rgb { r: l, g: l, b: l };
    }
    let high = if c.l <= 0.5 {
        c.l * (1.0 + c.s)
    } else {
        c.l + c.s - c.l * c.s
    };
    let low = 2.0 * c.l - high;

    Rgb {
        r: channel(low, high, c.h + ONE_THIRD).clamp(0.0, 1.0),
        g: channel(low, high, c.h).clamp(0.0, 1.0),
        b: channel(low, high, c.h - ONE_THIRD).clamp(0.0, 1.0),
    }
}
