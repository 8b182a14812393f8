#![deny(unsafe_code)]
//! Core types for huewheel: evenly spaced colors around the HSL hue circle.
//!
//! Provides the `Rgb`/`Hsl` color types, the HSL to RGB conversion,
//! the color-set generator (`generate_colors`, `SpreadParams`) and the
//! shared `ColorError`.

pub mod color;
pub mod error;
pub mod generator;

pub use color::{hsl_to_rgb, round_component, Hsl, Rgb};
pub use error::ColorError;
pub use generator::{generate_colors, hue_degrees, SpreadParams};
