//! Rectangular cropping in pixel coordinates.
//!
//! A crop is written as dash-joined integers, either `x-y` (crop from the
//! offset to the bottom-right corner) or `x-y-width-height`.
//!
//! # Example
//!
//! ```ignore
//! let window: CropWindow = "10-10-50-50".parse()?;
//! let cropped = apply_crop(image, window)?;
//! ```

use crate::error::{BitmapError, Result};
use crate::pixels::PixelGrid;
use std::str::FromStr;

/// A requested crop window, not yet checked against an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    pub offset_x: i64,
    pub offset_y: i64,
    /// `None` means "to the image edge".
    pub size: Option<(i64, i64)>,
}

impl CropWindow {
    /// Build a window from 2 or 4 integers.
    pub fn from_values(values: &[i64]) -> Result<Self> {
        match *values {
            [offset_x, offset_y] => Ok(Self {
                offset_x,
                offset_y,
                size: None,
            }),
            [offset_x, offset_y, width, height] => Ok(Self {
                offset_x,
                offset_y,
                size: Some((width, height)),
            }),
            _ => Err(BitmapError::invalid(format!(
                "invalid number of crop values: expected 2 or 4, got {}",
                values.len()
            ))),
        }
    }

    /// Resolve against an image, returning `(x, y, width, height)`.
    ///
    /// # Errors
    ///
    /// Returns [`BitmapError::CropOutOfBounds`] if the offset lies outside
    /// the image, the window is empty or negative, or it extends past the
    /// right or bottom edge.
    pub fn resolve(&self, width: u32, height: u32) -> Result<(u32, u32, u32, u32)> {
        let (w, h) = (width as i64, height as i64);
        let (x, y) = (self.offset_x, self.offset_y);

        if x < 0 || y < 0 || x >= w || y >= h {
            return Err(BitmapError::CropOutOfBounds(format!(
                "offset ({}, {}) is outside the {}x{} image",
                x, y, width, height
            )));
        }

        let (crop_w, crop_h) = self.size.unwrap_or((w - x, h - y));
        if crop_w <= 0 || crop_h <= 0 {
            return Err(BitmapError::CropOutOfBounds(format!(
                "crop size {}x{} is empty",
                crop_w, crop_h
            )));
        }

        // 0 <= x < w and 0 <= y < h here, so the subtractions cannot overflow.
        if crop_w > w - x || crop_h > h - y {
            return Err(BitmapError::CropOutOfBounds(format!(
                "{}x{} at ({}, {}) exceeds the {}x{} image",
                crop_w, crop_h, x, y, width, height
            )));
        }

        Ok((x as u32, y as u32, crop_w as u32, crop_h as u32))
    }
}

impl FromStr for CropWindow {
    type Err = BitmapError;

    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split('-')
            .map(|token| {
                token.parse::<i64>().map_err(|_| {
                    BitmapError::invalid(format!("invalid crop value '{}' in '{}'", token, s))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_values(&values)
    }
}

/// Crop a grid to `window`.
///
/// Rows and columns keep their relative order. Cropping to the full image
/// returns the grid unchanged.
pub fn apply_crop(grid: PixelGrid, window: CropWindow) -> Result<PixelGrid> {
    let (x, y, out_width, out_height) = window.resolve(grid.width, grid.height)?;

    // Fast path: full crop returns the input
    if out_width == grid.width && out_height == grid.height {
        return Ok(grid);
    }

    let mut output = Vec::with_capacity(out_width as usize * out_height as usize);
    for row in y..y + out_height {
        let start = grid.index(x, row);
        output.extend_from_slice(&grid.pixels[start..start + out_width as usize]);
    }

    Ok(PixelGrid::new(out_width, out_height, output))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
