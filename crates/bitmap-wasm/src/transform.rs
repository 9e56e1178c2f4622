//! WASM bindings for the transform pipeline.
//!
//! Options use the same names and values as the core pipeline: `mirror`,
//! `filter`, `rotate` and `crop`, with or without a leading `--`.
//!
//! ```typescript
//! const rotated = apply_option(image, 'rotate', 'right');
//! const result = apply_options(image, [
//!   { name: 'crop', value: '10-10-50-50' },
//!   { name: 'filter', value: 'grayscale' },
//! ]);
//! ```

use crate::settings::FilterSettings;
use crate::types::JsBitmap;
use bitmap_core::ImageOption;
use wasm_bindgen::prelude::*;

/// Apply a single transform, returning a new bitmap.
///
/// # Errors
///
/// Returns an error for an unknown option name, an unparseable value or a
/// crop window outside the image.
#[wasm_bindgen]
pub fn apply_option(image: &JsBitmap, name: &str, value: &str) -> Result<JsBitmap, JsValue> {
    image
        .as_bitmap()
        .clone()
        .apply(name, value)
        .map(JsBitmap::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Apply an array of `{ name, value }` options in order.
///
/// Processing stops at the first failing option; the source bitmap is left
/// untouched either way.
#[wasm_bindgen]
pub fn apply_options(image: &JsBitmap, options: JsValue) -> Result<JsBitmap, JsValue> {
    apply_options_with(image, options, &FilterSettings::default())
}

/// [`apply_options`] with custom pixelate and blur sizes.
#[wasm_bindgen]
pub fn apply_options_with(
    image: &JsBitmap,
    options: JsValue,
    settings: &FilterSettings,
) -> Result<JsBitmap, JsValue> {
    if !js_sys::Array::is_array(&options) {
        return Err(JsValue::from_str("Options must be an array of { name, value } objects"));
    }
    let options: Vec<ImageOption> = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?;

    run_options(image, &options, settings).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn run_options(
    image: &JsBitmap,
    options: &[ImageOption],
    settings: &FilterSettings,
) -> bitmap_core::Result<JsBitmap> {
    let bitmap = image.as_bitmap();
    let (pixels, info_header) = bitmap_core::apply_options_with(
        bitmap.pixels.clone(),
        bitmap.info_header,
        options,
        settings.inner(),
    )?;

    Ok(JsBitmap::from_bitmap(bitmap_core::Bitmap {
        file_header: bitmap.file_header,
        info_header,
        pixels,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitmap_core::{Bitmap, ErrorKind, Pixel, PixelGrid};

    fn letters() -> JsBitmap {
        // 3x2: top row 1 2 3, bottom row 4 5 6 (stored in the red channel)
        let grid = PixelGrid::from_fn(3, 2, |x, y| Pixel::new((y * 3 + x + 1) as u8, 0, 0));
        JsBitmap::from_bitmap(Bitmap::from_grid(grid))
    }

    fn reds(image: &JsBitmap) -> Vec<u8> {
        image.pixels().chunks_exact(3).map(|p| p[0]).collect()
    }

    #[test]
    fn test_apply_option_rotate() {
        let rotated = apply_option(&letters(), "--rotate", "right").unwrap();
        assert_eq!((rotated.width(), rotated.height()), (2, 3));
        assert_eq!(reds(&rotated), vec![4, 1, 5, 2, 6, 3]);
    }

    #[test]
    fn test_source_untouched() {
        let source = letters();
        let _ = apply_option(&source, "mirror", "h").unwrap();
        assert_eq!(reds(&source), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_run_options_in_order() {
        let options = [
            ImageOption::new("crop", "1-0"),
            ImageOption::new("mirror", "vertical"),
        ];
        let result = run_options(&letters(), &options, &FilterSettings::default()).unwrap();
        assert_eq!((result.width(), result.height()), (2, 2));
        assert_eq!(reds(&result), vec![5, 6, 2, 3]);
    }

    #[test]
    fn test_run_options_with_settings() {
        let mut settings = FilterSettings::new();
        settings.set_pixelate_block_size(1);
        let options = [ImageOption::new("filter", "pixelate")];
        let result = run_options(&letters(), &options, &settings).unwrap();
        assert_eq!(reds(&result), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_run_options_error() {
        let options = [ImageOption::new("crop", "5-5")];
        let err = run_options(&letters(), &options, &FilterSettings::default())
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::Bounds);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn image() -> JsBitmap {
        JsBitmap::new(2, 2, vec![255; 12]).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_apply_options_array() {
        let options = vec![
            ImageOption::new("filter", "negative"),
            ImageOption::new("rotate", "180"),
        ];
        let value = serde_wasm_bindgen::to_value(&options).unwrap();
        let result = apply_options(&image(), value).unwrap();
        assert_eq!(result.pixels(), vec![0; 12]);
    }

    #[wasm_bindgen_test]
    fn test_apply_options_rejects_non_array() {
        let value = serde_wasm_bindgen::to_value(&"--filter=blue").unwrap();
        assert!(apply_options(&image(), value).is_err());
    }

    #[wasm_bindgen_test]
    fn test_apply_option_invalid_value() {
        assert!(apply_option(&image(), "filter", "sepia").is_err());
    }
}
