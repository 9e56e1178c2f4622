//! Bitmap encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_bitmap`] - Encode a JsBitmap, keeping its header version
//! - [`encode_rgb`] - Encode raw RGB pixel data with a 40-byte header
//!
//! # Example
//!
//! ```typescript
//! import { encode_bitmap, encode_rgb } from '@bitmap/wasm';
//!
//! const fileBytes = encode_bitmap(image);
//! const fromPixels = encode_rgb(pixels, width, height);
//! ```

use crate::types::JsBitmap;
use bitmap_core::{Bitmap, PixelGrid};
use wasm_bindgen::prelude::*;

/// Encode a bitmap into the bytes of a complete file.
///
/// The header version and metadata the bitmap was decoded with are kept;
/// the file size field is recomputed.
#[wasm_bindgen]
pub fn encode_bitmap(image: &JsBitmap) -> Result<Vec<u8>, JsValue> {
    image
        .as_bitmap()
        .to_bytes()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode RGB pixel data (3 bytes per pixel, top row first) as a bitmap
/// file with a version 3 info header.
///
/// # Errors
///
/// Returns an error if the pixel data length doesn't match width * height * 3.
#[wasm_bindgen]
pub fn encode_rgb(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode_rgb_bytes(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn encode_rgb_bytes(pixels: &[u8], width: u32, height: u32) -> bitmap_core::Result<Vec<u8>> {
    let grid = PixelGrid::from_rgb_bytes(width, height, pixels)?;
    Bitmap::from_grid(grid).to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_bitmap;
    use bitmap_core::ErrorKind;

    #[test]
    fn test_encode_rgb_roundtrip() {
        let pixels: Vec<u8> = (0..3 * 3 * 2).map(|i| i as u8 * 10).collect();
        let bytes = encode_rgb(&pixels, 3, 2).unwrap();
        // 54 header bytes + 2 rows of 12 bytes (9 + 3 padding)
        assert_eq!(bytes.len(), 78);
        assert_eq!(&bytes[..2], b"BM");

        let image = decode_bitmap(&bytes).unwrap();
        assert_eq!(image.pixels(), pixels);
    }

    #[test]
    fn test_encode_bitmap_keeps_header_version() {
        use bitmap_core::header::{FileHeader, HeaderVersion, V4Fields};

        let mut core = Bitmap::new(2, 2);
        core.info_header.version = HeaderVersion::V4(V4Fields::default());
        core.file_header = FileHeader::for_info(&core.info_header);
        let source = core.to_bytes().unwrap();

        let image = decode_bitmap(&source).unwrap();
        assert_eq!(image.header_size(), 108);
        assert_eq!(encode_bitmap(&image).unwrap(), source);
    }

    #[test]
    fn test_encode_rgb_length_mismatch() {
        let err = encode_rgb_bytes(&[0; 5], 1, 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
    }
}
