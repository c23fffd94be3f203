//! Delegated document listeners.
//!
//! One `click` and one `keydown` listener on the document serve every
//! trigger, image and the overlay, present or future. The closures live
//! for the rest of the page and are leaked with `forget`.

use std::rc::Rc;

use gallery_core::Gallery;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, KeyboardEvent, Node};

use crate::WebError;
use crate::web_dom::{WebDom, js_error_message};

/// Element an event originated from. Text-node targets resolve to their
/// parent element.
fn event_element(event: &Event) -> Option<Element> {
    let target = event.target()?;
    if let Some(element) = target.dyn_ref::<Element>() {
        return Some(element.clone());
    }
    target.dyn_ref::<Node>()?.parent_element()
}

fn listen(document: &Document, event: &'static str, handler: &JsValue) -> Result<(), WebError> {
    document
        .add_event_listener_with_callback(event, handler.unchecked_ref())
        .map_err(|e| WebError::Listener {
            event,
            message: js_error_message(&e),
        })
}

pub fn attach(document: &Document, gallery: Rc<Gallery<WebDom>>) -> Result<(), WebError> {
    let clicks = Rc::clone(&gallery);
    let on_click = Closure::<dyn Fn(Event)>::new(move |event: Event| {
        if let Some(target) = event_element(&event) {
            clicks.handle_click(&target);
        }
    });
    listen(document, "click", on_click.as_ref())?;
    on_click.forget();

    let on_key = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        gallery.handle_key(&event.key());
    });
    listen(document, "keydown", on_key.as_ref())?;
    on_key.forget();

    Ok(())
}
