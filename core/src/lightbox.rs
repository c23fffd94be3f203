//! Click-to-enlarge overlay.
//!
//! One overlay element per controller, created by [`LightboxController::initialize`].
//! The overlay cycles between [`OverlayState::Hidden`] and
//! [`OverlayState::Shown`] for the lifetime of the page:
//!
//! - image activation: `Hidden -> Shown` (or `Shown -> Shown` with new content)
//! - overlay click or Escape: `Shown -> Hidden`

use std::cell::{Cell, RefCell};

use gallery_types::LightboxConfig;

use crate::dom::Dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Hidden,
    Shown,
}

pub struct LightboxController<D: Dom> {
    dom: D,
    config: LightboxConfig,
    overlay: RefCell<Option<D::Node>>,
    state: Cell<OverlayState>,
}

impl<D: Dom> LightboxController<D> {
    pub fn new(dom: D, config: LightboxConfig) -> Self {
        Self {
            dom,
            config,
            overlay: RefCell::new(None),
            state: Cell::new(OverlayState::Hidden),
        }
    }

    pub fn config(&self) -> &LightboxConfig {
        &self.config
    }

    /// Create the overlay and mark the current gallery images as zoomable.
    ///
    /// Reuses an element that already carries the overlay id, so calling
    /// this twice (or running two controllers with the same id) never
    /// produces a second overlay. Returns whether the overlay is live.
    pub fn initialize(&self) -> bool {
        if !self.config.enabled {
            return false;
        }
        if self.overlay.borrow().is_some() {
            return true;
        }

        let Some(overlay) = self.find_or_create_overlay() else {
            tracing::warn!(id = %self.config.overlay_id, "lightbox overlay could not be created");
            return false;
        };
        self.dom.set_class(&overlay, &self.config.visible_class, false);
        *self.overlay.borrow_mut() = Some(overlay);
        self.state.set(OverlayState::Hidden);

        if let Some(cursor) = &self.config.zoom_cursor {
            for image in self.dom.query_all(&self.config.image_selector) {
                self.dom.set_style(&image, "cursor", cursor);
            }
        }
        true
    }

    fn find_or_create_overlay(&self) -> Option<D::Node> {
        if let Some(existing) = self.dom.element_by_id(&self.config.overlay_id) {
            tracing::debug!(id = %self.config.overlay_id, "adopting existing overlay element");
            return Some(existing);
        }
        let body = self.dom.body()?;
        let overlay = self.dom.create_element("div")?;
        self.dom.set_attribute(&overlay, "id", &self.config.overlay_id);
        self.dom.append_child(&body, &overlay);
        Some(overlay)
    }

    pub fn overlay(&self) -> Option<D::Node> {
        self.overlay.borrow().clone()
    }

    /// Whether `initialize` produced an overlay
    pub fn is_live(&self) -> bool {
        self.overlay.borrow().is_some()
    }

    pub fn state(&self) -> OverlayState {
        self.state.get()
    }

    pub fn is_shown(&self) -> bool {
        self.state.get() == OverlayState::Shown
    }

    /// Resolve the gallery image a click on `target` belongs to
    pub fn image_for(&self, target: &D::Node) -> Option<D::Node> {
        self.dom.closest(target, &self.config.image_selector)
    }

    /// Whether a click on `target` landed on the overlay or its content
    pub fn owns(&self, target: &D::Node) -> bool {
        self.overlay
            .borrow()
            .as_ref()
            .is_some_and(|overlay| self.dom.contains(overlay, target))
    }

    pub fn on_image_activated(&self, image: &D::Node) {
        let Some(overlay) = self.overlay() else {
            return;
        };

        self.state.set(OverlayState::Shown);
        self.dom.set_class(&overlay, &self.config.visible_class, true);
        self.dom.clear_children(&overlay);

        let Some(enlarged) = self.dom.create_element("img") else {
            tracing::debug!("could not create enlarged image");
            return;
        };
        let src = self.dom.attribute(image, "src");
        if let Some(src) = &src {
            self.dom.set_attribute(&enlarged, "src", src);
        }
        let alt = self.dom.attribute(image, "alt").unwrap_or_default();
        self.dom.set_attribute(&enlarged, "alt", &alt);
        self.dom.append_child(&overlay, &enlarged);

        tracing::debug!(src = src.as_deref().unwrap_or(""), "lightbox shown");
    }

    /// Handle a click on the overlay.
    ///
    /// `target` is the clicked element: the overlay itself or its enlarged
    /// image. With `dismiss_on_image_click` off, only the overlay itself
    /// dismisses.
    pub fn on_overlay_activated(&self, target: &D::Node) {
        let Some(overlay) = self.overlay() else {
            return;
        };
        if !self.config.dismiss_on_image_click && *target != overlay {
            return;
        }
        self.hide(&overlay);
    }

    /// Handle the Escape key. Returns whether the overlay was dismissed.
    pub fn on_escape(&self) -> bool {
        if !self.config.dismiss_on_escape || !self.is_shown() {
            return false;
        }
        match self.overlay() {
            Some(overlay) => {
                self.hide(&overlay);
                true
            }
            None => false,
        }
    }

    fn hide(&self, overlay: &D::Node) {
        self.state.set(OverlayState::Hidden);
        self.dom.set_class(overlay, &self.config.visible_class, false);
        tracing::debug!("lightbox hidden");
    }
}
