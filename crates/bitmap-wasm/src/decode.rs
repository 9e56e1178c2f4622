//! Bitmap decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_bitmap`] - Decode a complete 24-bit bitmap file
//! - [`read_header_summary`] - Validate the headers and return their fields
//!
//! # Example
//!
//! ```typescript
//! import { decode_bitmap, read_header_summary } from '@bitmap/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const summary = read_header_summary(bytes);
//! console.log(`${summary.width}x${summary.height}, ${summary.dib_header_size}-byte header`);
//! const image = decode_bitmap(bytes);
//! ```

use crate::types::JsBitmap;
use bitmap_core::header::{decode_headers, validate};
use bitmap_core::{Bitmap, HeaderSummary};
use wasm_bindgen::prelude::*;

/// Decode a bitmap from the bytes of a whole file.
///
/// # Errors
///
/// Returns an error if:
/// - The file is shorter than 54 bytes or does not start with "BM"
/// - The info header is not 40, 108 or 124 bytes long
/// - The image is not 24-bit uncompressed
/// - The pixel data is truncated
#[wasm_bindgen]
pub fn decode_bitmap(bytes: &[u8]) -> Result<JsBitmap, JsValue> {
    Bitmap::from_bytes(bytes)
        .map(JsBitmap::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate the headers of a bitmap and return their fields as an object.
///
/// The object has `signature`, `file_size`, `header_size`,
/// `dib_header_size`, `width`, `height`, `bits_per_pixel` and `image_size`.
/// The pixel data is not decoded.
#[wasm_bindgen]
pub fn read_header_summary(bytes: &[u8]) -> Result<JsValue, JsValue> {
    let summary = header_summary(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&summary).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn header_summary(bytes: &[u8]) -> bitmap_core::Result<HeaderSummary> {
    let (file_header, info) = decode_headers(bytes)?;
    validate(&file_header, &info, bytes.len() as u64)?;
    Ok(HeaderSummary::new(&file_header, &info))
}
