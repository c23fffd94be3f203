//! DOM abstraction the controllers are written against.
//!
//! Every method is infallible from the caller's point of view: a binding
//! that hits an error (detached node, rejected selector, exception from
//! the host) degrades to a no-op or an empty result. Presentation glue has
//! nothing useful to do with a failure besides leave the page as it is.

use std::fmt::Debug;

/// CSS `display` values the controllers write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    #[inline]
    pub fn visible(visible: bool) -> Self {
        if visible { Self::Block } else { Self::None }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::None => "none",
        }
    }
}

/// Minimal element-level DOM surface.
pub trait Dom {
    /// Opaque element handle. Equality is element identity.
    type Node: Clone + PartialEq + Debug;

    fn body(&self) -> Option<Self::Node>;

    /// All connected elements matching `selector`, in document order
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Nearest inclusive ancestor of `node` matching `selector`
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;

    /// Whether `node` is `ancestor` or one of its descendants
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    /// Add (`present = true`) or remove a class
    fn set_class(&self, node: &Self::Node, class: &str, present: bool);

    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Create a detached element
    fn create_element(&self, tag: &str) -> Option<Self::Node>;

    fn append_child(&self, parent: &Self::Node, child: &Self::Node);

    fn clear_children(&self, node: &Self::Node);

    fn set_display(&self, node: &Self::Node, display: Display) {
        self.set_style(node, "display", display.as_css());
    }
}
