//! Category filter controller
//!
//! Activating a trigger marks it as the single active trigger, reveals the
//! gallery wrapper, and shows exactly the content elements whose category
//! key equals the trigger's filter key.

use std::cell::RefCell;

use gallery_types::{FilterConfig, FilterKey};

use crate::dom::{Display, Dom};

pub struct FilterController<D: Dom> {
    dom: D,
    config: FilterConfig,
    selected: RefCell<Option<FilterKey>>,
}

impl<D: Dom> FilterController<D> {
    pub fn new(dom: D, config: FilterConfig) -> Self {
        Self {
            dom,
            config,
            selected: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Key of the most recent activation.
    ///
    /// `None` before the first activation, and after activating a trigger
    /// that carries no usable key.
    pub fn selected(&self) -> Option<FilterKey> {
        self.selected.borrow().clone()
    }

    /// Resolve the trigger a click on `target` belongs to
    pub fn trigger_for(&self, target: &D::Node) -> Option<D::Node> {
        self.dom.closest(target, &self.config.trigger_selector)
    }

    pub fn on_trigger_activated(&self, trigger: &D::Node) {
        let active = &self.config.active_class;
        for other in self.dom.query_all(&self.config.trigger_selector) {
            self.dom.set_class(&other, active, false);
        }
        self.dom.set_class(trigger, active, true);

        match self.dom.element_by_id(&self.config.wrapper_id) {
            Some(wrapper) => self.dom.set_display(&wrapper, Display::Block),
            None => tracing::debug!(id = %self.config.wrapper_id, "gallery wrapper not found"),
        }

        let raw = self.dom.attribute(trigger, &self.config.filter_attribute);

        let mut shown = 0usize;
        let mut hidden = 0usize;
        for content in self.dom.query_all(&self.config.content_selector) {
            // Literal comparison: "" matches "", an absent attribute matches nothing
            let visible = match (&raw, self.dom.attribute(&content, &self.config.category_attribute)) {
                (Some(filter), Some(category)) => *filter == category,
                _ => false,
            };
            self.dom.set_display(&content, Display::visible(visible));
            if visible {
                shown += 1;
            } else {
                hidden += 1;
            }
        }

        tracing::debug!(filter = ?raw, shown, hidden, "category filter applied");
        *self.selected.borrow_mut() = FilterKey::from_attribute(raw);
    }
}
