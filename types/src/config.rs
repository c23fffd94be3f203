//! Page configuration.
//!
//! Every selector, attribute and class name the controllers touch lives
//! here. Defaults describe the stock gallery markup:
//!
//! ```html
//! <button class="filter-btn" data-filter="nature">Nature</button>
//! <div id="gallery-section">
//!   <section class="gallery" data-category="nature">
//!     <div class="image-grid"><img src="/img/a.jpg" alt="Lake"></div>
//!   </section>
//! </div>
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration for one gallery page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub filter: FilterConfig,
    pub lightbox: LightboxConfig,
}

/// Category filter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Selector for filter buttons
    pub trigger_selector: String,
    /// Selector for category sections
    pub content_selector: String,
    /// Id of the wrapper shown on first activation
    pub wrapper_id: String,
    /// Attribute holding a trigger's filter key
    pub filter_attribute: String,
    /// Attribute holding a section's category key
    pub category_attribute: String,
    /// Class marking the selected trigger
    pub active_class: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            trigger_selector: ".filter-btn".to_string(),
            content_selector: ".gallery".to_string(),
            wrapper_id: "gallery-section".to_string(),
            filter_attribute: "data-filter".to_string(),
            category_attribute: "data-category".to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// Lightbox overlay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    pub enabled: bool,
    /// Id given to the overlay element
    pub overlay_id: String,
    /// Selector for images that open the overlay
    pub image_selector: String,
    /// Class toggled on the overlay while shown
    pub visible_class: String,
    /// Cursor applied to gallery images at startup (`None` leaves styling to CSS)
    pub zoom_cursor: Option<String>,
    /// Whether a click on the enlarged image itself closes the overlay.
    /// `false` restricts dismissal to the backdrop.
    pub dismiss_on_image_click: bool,
    pub dismiss_on_escape: bool,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            overlay_id: "lightbox".to_string(),
            image_selector: ".image-grid img".to_string(),
            visible_class: "active".to_string(),
            zoom_cursor: Some("zoom-in".to_string()),
            dismiss_on_image_click: true,
            dismiss_on_escape: true,
        }
    }
}
