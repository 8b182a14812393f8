#![deny(unsafe_code)]
//! Radial plot rendering for huewheel color sets.
//!
//! [`pixel`] turns a color set into an RGBA8 wheel buffer; [`snapshot`]
//! encodes that buffer as PNG. The CLI depends on this crate for `--plot`.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::{check_size, wedge_index, wheel_to_rgba, MAX_SIZE};
