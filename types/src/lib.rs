//! Shared types for the gallery page controllers.
//!
//! Kept free of DOM and wasm dependencies so the same definitions serve the
//! browser binding, the core controllers, and native tests.

pub mod config;
pub mod key;

pub use config::{FilterConfig, GalleryConfig, LightboxConfig};
pub use key::{FilterKey, KeyError};
