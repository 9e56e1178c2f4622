//! WASM bindings for filter settings.

use wasm_bindgen::prelude::*;

/// Sizes used by the `pixelate` and `blur` filters.
///
/// Mirrors `bitmap_core::FilterSettings` with JavaScript getters and setters.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct FilterSettings {
    inner: bitmap_core::FilterSettings,
}

#[wasm_bindgen]
impl FilterSettings {
    /// Create settings with the default sizes (20 and 25).
    #[wasm_bindgen(constructor)]
    pub fn new() -> FilterSettings {
        Self::default()
    }

    #[wasm_bindgen(getter)]
    pub fn pixelate_block_size(&self) -> u32 {
        self.inner.pixelate_block_size
    }

    #[wasm_bindgen(setter)]
    pub fn set_pixelate_block_size(&mut self, value: u32) {
        self.inner.pixelate_block_size = value;
    }

    #[wasm_bindgen(getter)]
    pub fn blur_kernel_size(&self) -> u32 {
        self.inner.blur_kernel_size
    }

    #[wasm_bindgen(setter)]
    pub fn set_blur_kernel_size(&mut self, value: u32) {
        self.inner.blur_kernel_size = value;
    }

    /// Serialize to a plain object for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from a plain object; missing fields take their defaults
    pub fn from_json(value: JsValue) -> Result<FilterSettings, JsValue> {
        let inner: bitmap_core::FilterSettings =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl FilterSettings {
    pub(crate) fn inner(&self) -> &bitmap_core::FilterSettings {
        &self.inner
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_json_roundtrip() {
        let mut settings = FilterSettings::new();
        settings.set_blur_kernel_size(7);
        let restored = FilterSettings::from_json(settings.to_json().unwrap()).unwrap();
        assert_eq!(restored.blur_kernel_size(), 7);
        assert_eq!(restored.pixelate_block_size(), 20);
    }

    #[wasm_bindgen_test]
    fn test_from_json_rejects_non_object() {
        let value = serde_wasm_bindgen::to_value(&"big").unwrap();
        assert!(FilterSettings::from_json(value).is_err());
    }
}
