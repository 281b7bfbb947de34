//! Raw RGBA pixel buffers

use crate::color::Color;
use crate::error::{DrawError, Result};
use crate::geometry::Rect;

/// Handle to an image uploaded to the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u64);

/// Row-major RGBA8 pixel data ready for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pixels: Vec<u8>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl ImageData {
    /// Create ImageData from raw RGBA pixels
    ///
    /// Fails when the buffer length is not `width * height * 4` or when either
    /// dimension is zero.
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected_len = width as usize * height as usize * 4;
        if width == 0 || height == 0 || pixels.len() != expected_len {
            return Err(DrawError::InvalidImage {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Color) -> Result<Self> {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y).to_array());
            }
        }
        Self::from_rgba(pixels, width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Full image bounds
    pub fn bounds(&self) -> Rect {
        Rect::from_xywh(0, 0, self.width as i32, self.height as i32)
    }

    /// Raw RGBA bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Color at (x, y), or `None` when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let p = &self.pixels[idx..idx + 4];
        Some(Color::rgba(p[0], p[1], p[2], p[3]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_validates_length() {
        assert!(ImageData::from_rgba(vec![0; 16], 2, 2).is_ok());
        assert_eq!(
            ImageData::from_rgba(vec![0; 15], 2, 2),
            Err(DrawError::InvalidImage {
                width: 2,
                height: 2,
                len: 15
            })
        );
        assert!(ImageData::from_rgba(Vec::new(), 0, 0).is_err());
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let img = ImageData::from_fn(3, 2, |x, y| Color::rgb(x as u8, y as u8, 0)).unwrap();
        assert_eq!(img.pixel(2, 0), Some(Color::rgb(2, 0, 0)));
        assert_eq!(img.pixel(0, 1), Some(Color::rgb(0, 1, 0)));
        assert_eq!(&img.pixels()[12..16], &[0, 1, 0, 0xff]);
        assert_eq!(img.pixel(3, 0), None);
    }
}
