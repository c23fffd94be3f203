//! Configuration validation
//!
//! `GalleryConfig` itself lives in `gallery-types`; this module checks that
//! a config can drive the controllers before any DOM work happens.

use gallery_types::{FilterConfig, GalleryConfig, LightboxConfig};
use thiserror::Error;

/// Errors that make a configuration unusable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be a single class name, got {value:?}")]
    InvalidClass { field: &'static str, value: String },

    #[error("{field} must be a single element id, got {value:?}")]
    InvalidId { field: &'static str, value: String },
}

/// Check every selector, attribute, class and id in `config`.
///
/// Lightbox fields are only checked when the lightbox is enabled.
pub fn validate_config(config: &GalleryConfig) -> Result<(), ConfigError> {
    validate_filter(&config.filter)?;
    if config.lightbox.enabled {
        validate_lightbox(&config.lightbox)?;
    }
    Ok(())
}

fn validate_filter(filter: &FilterConfig) -> Result<(), ConfigError> {
    non_empty("filter.trigger_selector", &filter.trigger_selector)?;
    non_empty("filter.content_selector", &filter.content_selector)?;
    non_empty("filter.filter_attribute", &filter.filter_attribute)?;
    non_empty("filter.category_attribute", &filter.category_attribute)?;
    single_id("filter.wrapper_id", &filter.wrapper_id)?;
    single_class("filter.active_class", &filter.active_class)
}

fn validate_lightbox(lightbox: &LightboxConfig) -> Result<(), ConfigError> {
    single_id("lightbox.overlay_id", &lightbox.overlay_id)?;
    non_empty("lightbox.image_selector", &lightbox.image_selector)?;
    single_class("lightbox.visible_class", &lightbox.visible_class)?;
    if let Some(cursor) = &lightbox.zoom_cursor {
        non_empty("lightbox.zoom_cursor", cursor)?;
    }
    Ok(())
}

fn non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty { field });
    }
    Ok(())
}

fn single_class(field: &'static str, value: &str) -> Result<(), ConfigError> {
    non_empty(field, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidClass {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn single_id(field: &'static str, value: &str) -> Result<(), ConfigError> {
    non_empty(field, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidId {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
