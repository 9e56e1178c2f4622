//! WASM-compatible wrapper types for bitmaps.
//!
//! This module provides JavaScript-friendly types that wrap the core bitmap
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use bitmap_core::{Bitmap, PixelGrid};
use wasm_bindgen::prelude::*;

/// A decoded bitmap wrapper for JavaScript.
///
/// Holds both headers alongside the pixels, so a bitmap decoded from a file
/// keeps its header version and metadata when it is encoded again.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` copies it into a
/// `Uint8Array`. The `free()` method releases the WASM memory right away;
/// otherwise wasm-bindgen's finalizer does it.
#[wasm_bindgen]
pub struct JsBitmap {
    inner: Bitmap,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Create a bitmap with version 3 headers from RGB pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major, top row first)
    ///
    /// # Errors
    /// Returns an error if `pixels.len() != width * height * 3`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsBitmap, JsValue> {
        PixelGrid::from_rgb_bytes(width, height, &pixels)
            .map(|grid| JsBitmap::from_bitmap(Bitmap::from_grid(grid)))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.pixels.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.pixels.height
    }

    /// Get the number of bytes `pixels()` returns (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels.pixel_count() * 3
    }

    /// Size of the info header: 40, 108 or 124.
    #[wasm_bindgen(getter)]
    pub fn header_size(&self) -> u32 {
        self.inner.info_header.size()
    }

    /// Returns RGB pixel data as Uint8Array.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.to_rgb_bytes()
    }

    /// Human-readable dump of the header fields.
    pub fn describe(&self) -> String {
        self.inner.summary().to_string()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {}
}

impl JsBitmap {
    pub(crate) fn from_bitmap(inner: Bitmap) -> Self {
        Self { inner }
    }

    pub(crate) fn as_bitmap(&self) -> &Bitmap {
        &self.inner
    }
}
