//! Browser entry point for the gallery page.
//!
//! Loading the wasm module is all a page has to do: the start function
//! waits for the document to finish parsing, builds a [`Gallery`] over the
//! live DOM, and installs the delegated listeners. Nothing is exported to
//! other scripts.

mod listeners;
pub mod page_config;
pub mod web_dom;

use std::rc::Rc;

use gallery_core::{ConfigError, Gallery};
use gallery_types::GalleryConfig;
use thiserror::Error;
use tracing::Level;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::web_dom::{WebDom, js_error_message};

/// Failures while bringing the page up. Logged, never thrown to the page.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("failed to register {event} listener: {message}")]
    Listener { event: &'static str, message: String },

    #[error("invalid window.galleryConfig: {0}")]
    PageConfig(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[wasm_bindgen(start)]
pub fn start() {
    // Another module on the page may already own the global subscriber
    let _ = dioxus_logger::init(Level::INFO);

    if let Err(e) = boot() {
        tracing::warn!(error = %e, "gallery not started");
    }
}

fn boot() -> Result<(), WebError> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    if document.ready_state() != "loading" {
        return mount(&window, &document);
    }

    let deferred_document = document.clone();
    let on_ready = Closure::<dyn FnMut()>::new(move || {
        if let Err(e) = mount(&window, &deferred_document) {
            tracing::warn!(error = %e, "gallery not started");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|e| WebError::Listener {
            event: "DOMContentLoaded",
            message: js_error_message(&e),
        })?;
    on_ready.forget();
    Ok(())
}

fn mount(window: &Window, document: &Document) -> Result<(), WebError> {
    let config = page_config::load(window).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring page config");
        GalleryConfig::default()
    });

    let dom = WebDom::new(document.clone());
    let gallery = match Gallery::new(dom.clone(), config) {
        Ok(gallery) => gallery,
        Err(e) => {
            tracing::warn!(error = %e, "invalid page config, using defaults");
            Gallery::new(dom, GalleryConfig::default())?
        }
    };
    gallery.initialize();

    listeners::attach(document, Rc::new(gallery))
}
