//! Page-level owner of both controllers.
//!
//! The browser binding registers one `click` and one `keydown` listener on
//! the document and forwards the event origin here. Routing resolves the
//! originating element at dispatch time, so triggers and images inserted
//! after startup behave like the ones present at load.

use gallery_types::GalleryConfig;

use crate::audit::{MarkupReport, audit};
use crate::config::{ConfigError, validate_config};
use crate::dom::Dom;
use crate::filter::FilterController;
use crate::lightbox::LightboxController;

/// Which handler a delegated click went to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    Overlay,
    Image,
    Trigger,
    Ignored,
}

pub struct Gallery<D: Dom> {
    dom: D,
    filter: FilterController<D>,
    lightbox: LightboxController<D>,
}

impl<D: Dom + Clone> Gallery<D> {
    /// Build both controllers. Touches no DOM state.
    pub fn new(dom: D, config: GalleryConfig) -> Result<Self, ConfigError> {
        validate_config(&config)?;
        let GalleryConfig { filter, lightbox } = config;
        Ok(Self {
            filter: FilterController::new(dom.clone(), filter),
            lightbox: LightboxController::new(dom.clone(), lightbox),
            dom,
        })
    }
}

impl<D: Dom> Gallery<D> {
    pub fn filter(&self) -> &FilterController<D> {
        &self.filter
    }

    pub fn lightbox(&self) -> &LightboxController<D> {
        &self.lightbox
    }

    /// Create the overlay and audit the page markup.
    ///
    /// Safe to call more than once; the overlay is created only the first
    /// time.
    pub fn initialize(&self) -> MarkupReport {
        let lightbox_live = self.lightbox.initialize();
        let report = audit(&self.dom, self.filter.config());
        report.log();
        tracing::info!(
            triggers = report.trigger_count,
            sections = report.content_count,
            lightbox = lightbox_live,
            "gallery initialized"
        );
        report
    }

    /// Route one delegated click on `target`.
    ///
    /// The overlay is checked first so a click on the enlarged image is
    /// never mistaken for a gallery image.
    pub fn handle_click(&self, target: &D::Node) -> Routed {
        let routed = if self.lightbox.owns(target) {
            self.lightbox.on_overlay_activated(target);
            Routed::Overlay
        } else if let Some(image) = self.lightbox_image(target) {
            self.lightbox.on_image_activated(&image);
            Routed::Image
        } else if let Some(trigger) = self.filter.trigger_for(target) {
            self.filter.on_trigger_activated(&trigger);
            Routed::Trigger
        } else {
            Routed::Ignored
        };

        if routed != Routed::Ignored {
            tracing::debug!(?routed, "click routed");
        }
        routed
    }

    fn lightbox_image(&self, target: &D::Node) -> Option<D::Node> {
        if !self.lightbox.is_live() {
            return None;
        }
        self.lightbox.image_for(target)
    }

    /// Route a `keydown` by its `KeyboardEvent.key` value.
    /// Returns whether the key was consumed.
    pub fn handle_key(&self, key: &str) -> bool {
        match key {
            "Escape" => self.lightbox.on_escape(),
            _ => false,
        }
    }
}
