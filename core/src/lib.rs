//! Category filtering and lightbox behavior for a static gallery page.
//!
//! The controllers are written against the [`Dom`] trait so the same code
//! drives the browser (through `gallery-web`) and the in-memory
//! [`testing::FakeDom`] used by the test suite.

pub mod audit;
pub mod config;
pub mod dom;
pub mod filter;
pub mod gallery;
pub mod lightbox;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(test)]
mod gallery_tests;

// Re-exports for convenience
pub use audit::{MarkupReport, audit};
pub use config::{ConfigError, validate_config};
pub use dom::{Display, Dom};
pub use filter::FilterController;
pub use gallery::{Gallery, Routed};
pub use lightbox::{LightboxController, OverlayState};

pub use gallery_types::{FilterConfig, FilterKey, GalleryConfig, LightboxConfig};
