//! `Dom` implementation over the live browser document.
//!
//! JS exceptions (invalid selectors, hierarchy errors) are logged at debug
//! level and turned into empty results, so a broken page degrades to
//! "nothing happens".

use gallery_core::Dom;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// Extract a readable message from a thrown JS value
pub(crate) fn js_error_message(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Log a failed DOM call at debug level and drop the error
fn logged<T, E>(op: &str, result: Result<T, E>, message: impl FnOnce(&E) -> String) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(op, error = %message(&e), "DOM call failed");
            None
        }
    }
}

#[derive(Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                tracing::debug!(selector, error = %js_error_message(&e), "querySelectorAll failed");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn closest(&self, node: &Element, selector: &str) -> Option<Element> {
        node.closest(selector).unwrap_or_else(|e| {
            tracing::debug!(selector, error = %js_error_message(&e), "closest failed");
            None
        })
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        ancestor.contains(Some(&**node))
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        logged("setAttribute", node.set_attribute(name, value), js_error_message);
    }

    fn set_class(&self, node: &Element, class: &str, present: bool) {
        logged(
            "classList.toggle",
            node.class_list().toggle_with_force(class, present),
            js_error_message,
        );
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        // SVG and other non-HTML elements have no inline style handle here
        if let Some(html) = node.dyn_ref::<HtmlElement>() {
            logged("style.setProperty", html.style().set_property(property, value), js_error_message);
        }
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        logged("createElement", self.document.create_element(tag), js_error_message)
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        logged("appendChild", parent.append_child(child), js_error_message);
    }

    fn clear_children(&self, node: &Element) {
        // Live list: walk backwards so removals don't shift pending indices
        let children = node.child_nodes();
        for i in (0..children.length()).rev() {
            if let Some(child) = children.get(i) {
                logged("removeChild", node.remove_child(&child), js_error_message);
            }
        }
    }
}
