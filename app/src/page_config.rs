//! Optional page-provided configuration.
//!
//! A page can override selectors and lightbox behavior before the module
//! loads:
//!
//! ```html
//! <script>
//!   window.galleryConfig = { lightbox: { dismiss_on_image_click: false } };
//! </script>
//! ```

use gallery_types::GalleryConfig;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::WebError;
use crate::web_dom::js_error_message;

/// Global the page assigns its overrides to
pub const CONFIG_GLOBAL: &str = "galleryConfig";

/// Read `window.galleryConfig`, returning defaults when it is not set
pub fn load(window: &Window) -> Result<GalleryConfig, WebError> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| WebError::PageConfig(js_error_message(&e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(GalleryConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| WebError::PageConfig(e.to_string()))
}
