//! Bitmap WASM - WebAssembly bindings for the bitmap codec
//!
//! This crate exposes the bitmap-core decoding, encoding and transform
//! pipeline to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - `JsBitmap`, the wrapper around a decoded bitmap
//! - `decode` - Bitmap decoding and header inspection
//! - `encode` - Bitmap encoding
//! - `transform` - Mirror, rotate, crop and filter options
//! - `settings` - Pixelate and blur sizes
//! - `logger` - Routes core log records to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_bitmap, apply_option, encode_bitmap } from '@bitmap/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_bitmap(bytes);
//! const rotated = apply_option(image, 'rotate', 'left');
//! const output = encode_bitmap(rotated);
//! ```

use log::LevelFilter;
use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod logger;
mod settings;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_bitmap, read_header_summary};
pub use encode::{encode_bitmap, encode_rgb};
pub use logger::ConsoleLogger;
pub use settings::FilterSettings;
pub use transform::{apply_option, apply_options, apply_options_with};
pub use types::JsBitmap;

/// Initialize the WASM module (called automatically on load).
///
/// Installs the console logger at `info` level.
#[wasm_bindgen(start)]
pub fn init() {
    logger::install(LevelFilter::Info);
}

/// Change how much of the core's logging reaches the console.
///
/// Accepts `off`, `error`, `warn`, `info`, `debug` or `trace`.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let level = logger::parse_level(level)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown log level: {}", level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
