use std::fmt;
use std::sync::Arc;

use ::image::{Rgba, RgbaImage};

use super::Color;

/// Side length of images synthesized by the `...FromColor` properties.
pub const SOLID_IMAGE_SIDE: u32 = 10;

/// Shared, immutable RGBA bitmap.
///
/// Cloning is cheap; pixels live behind an `Arc`. An optional name records
/// where the image came from (an asset name, or the color it was filled with)
/// and only serves diagnostics.
#[derive(Clone, PartialEq)]
pub struct Image {
    name: Option<Arc<str>>,
    pixels: Arc<RgbaImage>,
}

impl Image {
    pub fn new(pixels: RgbaImage) -> Self {
        Self { name: None, pixels: Arc::new(pixels) }
    }

    pub fn named(name: impl Into<Arc<str>>, pixels: RgbaImage) -> Self {
        Self { name: Some(name.into()), pixels: Arc::new(pixels) }
    }

    /// A `width`×`height` image filled with `color`.
    pub fn solid_sized(color: Color, width: u32, height: u32) -> Self {
        let pixels = RgbaImage::from_pixel(width, height, Rgba(color.to_srgb_u8()));
        let [r, g, b, a] = color.to_srgb_u8();
        Self::named(format!("solid #{r:02x}{g:02x}{b:02x}{a:02x}"), pixels)
    }

    /// The uniform image used when a color is styled onto an image property.
    pub fn solid(color: Color) -> Self {
        Self::solid_sized(color, SOLID_IMAGE_SIDE, SOLID_IMAGE_SIDE)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// The pixel at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("name", &self.name)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_is_ten_by_ten_and_uniform() {
        let img = Image::solid(Color::RED);
        assert_eq!((img.width(), img.height()), (10, 10));
        assert!(img.pixels().pixels().all(|p| p.0 == [255, 0, 0, 255]));
    }

    #[test]
    fn solid_records_its_color_in_the_name() {
        let img = Image::solid(Color::from_srgb_u8(0x12, 0x34, 0x56, 0xff));
        assert_eq!(img.name(), Some("solid #123456ff"));
    }

    #[test]
    fn pixel_outside_bounds_is_none() {
        let img = Image::solid_sized(Color::BLUE, 2, 3);
        assert_eq!(img.pixel(1, 2), Some([0, 0, 255, 255]));
        assert_eq!(img.pixel(2, 0), None);
    }

    #[test]
    fn clones_share_pixels_and_compare_equal() {
        let a = Image::solid(Color::GREEN);
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Image::solid(Color::BLUE));
    }
}
