//! Bottom-up, row-padded raster decoding and encoding.

use super::types::{Pixel, PixelGrid};
use crate::error::{BitmapError, Result};
use log::{debug, error};

/// Bytes occupied by one row of `width` pixels, padded to 4 bytes.
#[inline]
pub fn row_stride(width: u32) -> usize {
    (width as usize * 3).div_ceil(4) * 4
}

/// Decode a raster into a top-down grid.
///
/// `data` starts at the file's data offset. The first row in the file is
/// the bottom row of the picture; each row stores (B, G, R) triples followed
/// by zero padding up to [`row_stride`]. Bytes past the last row are ignored.
///
/// # Errors
///
/// Returns [`BitmapError::TruncatedData`] if `data` holds fewer than
/// `height` full rows.
pub fn decode_pixels(data: &[u8], width: u32, height: u32) -> Result<PixelGrid> {
    let stride = row_stride(width);
    let expected = stride * height as usize;
    if data.len() < expected {
        error!(
            "Raster holds {} bytes, {}x{} needs {}",
            data.len(),
            width,
            height,
            expected
        );
        return Err(BitmapError::TruncatedData {
            expected,
            actual: data.len(),
        });
    }

    let row_bytes = width as usize * 3;
    let mut pixels = vec![Pixel::BLACK; width as usize * height as usize];
    if row_bytes > 0 {
        for (r, row) in data[..expected].chunks_exact(stride).enumerate() {
            let y = height as usize - 1 - r;
            let dst = &mut pixels[y * width as usize..(y + 1) * width as usize];
            for (pixel, bgr) in dst.iter_mut().zip(row[..row_bytes].chunks_exact(3)) {
                *pixel = Pixel::new(bgr[2], bgr[1], bgr[0]);
            }
        }
    }

    debug!("Decoded {}x{} raster ({} bytes per row)", width, height, stride);
    Ok(PixelGrid::new(width, height, pixels))
}

/// Encode a grid as a bottom-up raster with zeroed row padding.
pub fn encode_pixels(grid: &PixelGrid) -> Vec<u8> {
    let width = grid.width as usize;
    let stride = row_stride(grid.width);
    let mut out = vec![0u8; stride * grid.height as usize];

    if width > 0 {
        for (r, row) in out.chunks_exact_mut(stride).enumerate() {
            let y = grid.height as usize - 1 - r;
            let src = &grid.pixels[y * width..(y + 1) * width];
            for (bgr, pixel) in row.chunks_exact_mut(3).zip(src) {
                bgr[0] = pixel.blue;
                bgr[1] = pixel.green;
                bgr[2] = pixel.red;
            }
        }
    }

    out
}


// ============================================================================
// Property-Based Tests
// ============================================================================
