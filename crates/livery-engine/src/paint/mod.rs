//! Paint values stored on widgets.
//!
//! Scope:
//! - color representation (straight alpha)
//! - bitmaps, including solid images synthesized from a color

pub mod color;
pub mod image;

pub use color::Color;
pub use image::{Image, SOLID_IMAGE_SIDE};
