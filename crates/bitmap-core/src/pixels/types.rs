//! Pixel and pixel grid types.

use crate::error::{BitmapError, Result};

/// One 24-bit pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// A decoded image: top-down, row-major pixels.
///
/// `pixels[y * width + x]` is the pixel at column `x` of row `y`, with row 0
/// at the top of the picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Length should be width * height.
    pub pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Create a grid from dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A grid where every pixel has the same colour.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        Self::new(width, height, vec![pixel; width as usize * height as usize])
    }

    /// Build a grid by evaluating `f(x, y)` for every position, row by row.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Pixel) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::new(width, height, pixels)
    }

    /// Build a grid from packed RGB bytes (3 bytes per pixel, row-major).
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if bytes.len() != expected {
            return Err(BitmapError::invalid(format!(
                "expected {} RGB bytes for a {}x{} image, got {}",
                expected,
                width,
                height,
                bytes.len()
            )));
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Pixel::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self::new(width, height, pixels))
    }

    /// Packed RGB bytes in row-major order.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [p.red, p.green, p.blue])
            .collect()
    }

    /// Index of `(x, y)` in [`pixels`](Self::pixels).
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// The pixel at `(x, y)`. Panics if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Pixel {
        self.pixels[self.index(x, y)]
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = PixelGrid::filled(100, 50, Pixel::BLACK);
        assert_eq!(grid.width, 100);
        assert_eq!(grid.height, 50);
        assert_eq!(grid.pixel_count(), 5000);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_grid_empty() {
        let grid = PixelGrid::new(0, 0, vec![]);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let grid = PixelGrid::from_fn(3, 2, |x, y| Pixel::new(x as u8, y as u8, 0));
        assert_eq!(grid.pixels[4], Pixel::new(1, 1, 0));
        assert_eq!(grid.get(2, 0), Pixel::new(2, 0, 0));
        assert_eq!(grid.index(2, 1), 5);
    }

    #[test]
    fn test_rgb_bytes_roundtrip() {
        let bytes = vec![255u8, 128, 64, 32, 16, 8];
        let grid = PixelGrid::from_rgb_bytes(2, 1, &bytes).unwrap();
        assert_eq!(grid.pixels[0], Pixel::new(255, 128, 64));
        assert_eq!(grid.to_rgb_bytes(), bytes);
    }

    #[test]
    fn test_rgb_bytes_length_mismatch() {
        let result = PixelGrid::from_rgb_bytes(2, 2, &[0u8; 6]);
        assert!(matches!(result, Err(BitmapError::InvalidArgument(_))));
    }
}
