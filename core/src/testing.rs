//! In-memory DOM for driving the controllers without a browser.
//!
//! Supports the selector subset the default configuration uses: type
//! (`img`), class (`.gallery`), id (`#lightbox`), attribute presence or
//! equality (`[data-filter]`, `[data-filter=city]`), compounds of those
//! (`button.filter-btn`), descendant combinators (`.image-grid img`) and
//! comma-separated lists. Anything else matches nothing.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::dom::Dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct FakeNode {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    style: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Default)]
struct Tree {
    nodes: Vec<FakeNode>,
    body: Option<NodeId>,
    fail_create: bool,
}

const ROOT: NodeId = NodeId(0);

impl Tree {
    fn node(&self, id: NodeId) -> &FakeNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut FakeNode {
        &mut self.nodes[id.0]
    }

    fn push(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(FakeNode {
            tag: tag.to_ascii_lowercase(),
            ..FakeNode::default()
        });
        id
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.node_mut(child).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != child);
        }
    }

    fn append(&mut self, parent: NodeId, child: NodeId) {
        // Refuse to create cycles
        if self.is_inclusive_ancestor(child, parent) {
            return;
        }
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }

    /// Connected nodes in document order, root excluded
    fn document_order(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(ROOT).children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }

    fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        selector.alternatives.iter().any(|chain| self.matches_chain(id, chain))
    }

    fn matches_chain(&self, id: NodeId, chain: &[Compound]) -> bool {
        let Some((last, ancestors)) = chain.split_last() else {
            return false;
        };
        if !last.matches(self.node(id)) {
            return false;
        }
        let mut current = self.node(id).parent;
        for compound in ancestors.iter().rev() {
            loop {
                let Some(candidate) = current else {
                    return false;
                };
                current = self.node(candidate).parent;
                if candidate != ROOT && compound.matches(self.node(candidate)) {
                    break;
                }
            }
        }
        true
    }
}

/// Shared handle to an in-memory document. Clones see the same tree.
#[derive(Debug, Clone)]
pub struct FakeDom {
    tree: Rc<RefCell<Tree>>,
}

impl FakeDom {
    /// Empty document with an `html` root and a `body`.
    pub fn new() -> Self {
        let dom = Self::without_body();
        {
            let mut tree = dom.tree.borrow_mut();
            let body = tree.push("body");
            tree.append(ROOT, body);
            tree.body = Some(body);
        }
        dom
    }

    /// Document whose body is missing, as seen by a script in `<head>`
    /// that runs before parsing reaches `<body>`.
    pub fn without_body() -> Self {
        let mut tree = Tree::default();
        tree.push("html");
        Self {
            tree: Rc::new(RefCell::new(tree)),
        }
    }

    /// Panics when the document was built with [`FakeDom::without_body`].
    pub fn body_id(&self) -> NodeId {
        self.tree.borrow().body.expect("document has no body")
    }

    /// Create `tag` and append it to `parent`
    pub fn element(&self, parent: NodeId, tag: &str) -> NodeId {
        let mut tree = self.tree.borrow_mut();
        let id = tree.push(tag);
        tree.append(parent, id);
        id
    }

    pub fn set_attr(&self, node: NodeId, name: &str, value: &str) {
        Dom::set_attribute(self, &node, name, value);
    }

    pub fn add_class(&self, node: NodeId, class: &str) {
        Dom::set_class(self, &node, class, true);
    }

    pub fn remove(&self, node: NodeId) {
        self.tree.borrow_mut().detach(node);
    }

    /// Make every later `create_element` call fail
    pub fn fail_element_creation(&self, fail: bool) {
        self.tree.borrow_mut().fail_create = fail;
    }

    pub fn tag(&self, node: NodeId) -> String {
        self.tree.borrow().node(node).tag.clone()
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        Dom::attribute(self, &node, name)
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.tree.borrow().node(node).classes.contains(class)
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.tree.borrow().node(node).style.get(property).cloned()
    }

    /// Inline `display` value, `None` if never written
    pub fn display(&self, node: NodeId) -> Option<String> {
        self.style(node, "display")
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree.borrow().node(node).parent
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree.borrow().node(node).children.clone()
    }

    pub fn query_ids(&self, selector: &str) -> Vec<NodeId> {
        Dom::query_all(self, selector)
    }
}

impl Default for FakeDom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for FakeDom {
    type Node = NodeId;

    fn body(&self) -> Option<NodeId> {
        self.tree.borrow().body
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let Some(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        let tree = self.tree.borrow();
        tree.document_order()
            .into_iter()
            .filter(|id| tree.matches(*id, &selector))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let tree = self.tree.borrow();
        tree.document_order()
            .into_iter()
            .find(|node| tree.node(*node).attributes.get("id").is_some_and(|v| v == id))
    }

    fn closest(&self, node: &NodeId, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector)?;
        let tree = self.tree.borrow();
        let mut current = Some(*node);
        while let Some(id) = current {
            if id == ROOT {
                break;
            }
            if tree.matches(id, &selector) {
                return Some(id);
            }
            current = tree.node(id).parent;
        }
        None
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        self.tree.borrow().is_inclusive_ancestor(*ancestor, *node)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let tree = self.tree.borrow();
        let node = tree.node(*node);
        if name == "class" {
            if node.classes.is_empty() {
                return None;
            }
            return Some(node.classes.iter().cloned().collect::<Vec<_>>().join(" "));
        }
        node.attributes.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        let mut tree = self.tree.borrow_mut();
        let node = tree.node_mut(*node);
        if name == "class" {
            node.classes = value.split_whitespace().map(str::to_string).collect();
        } else {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_class(&self, node: &NodeId, class: &str, present: bool) {
        let mut tree = self.tree.borrow_mut();
        let classes = &mut tree.node_mut(*node).classes;
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.tree
            .borrow_mut()
            .node_mut(*node)
            .style
            .insert(property.to_string(), value.to_string());
    }

    fn create_element(&self, tag: &str) -> Option<NodeId> {
        let mut tree = self.tree.borrow_mut();
        if tree.fail_create {
            return None;
        }
        Some(tree.push(tag))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) {
        self.tree.borrow_mut().append(*parent, *child);
    }

    fn clear_children(&self, node: &NodeId) {
        let mut tree = self.tree.borrow_mut();
        let children = std::mem::take(&mut tree.node_mut(*node).children);
        for child in children {
            tree.node_mut(child).parent = None;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Selector subset
// ─────────────────────────────────────────────────────────────────────────────

struct Selector {
    /// Comma-separated alternatives, each a descendant chain
    alternatives: Vec<Vec<Compound>>,
}

#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
}

impl Selector {
    fn parse(input: &str) -> Option<Self> {
        let alternatives = input
            .split(',')
            .map(|alt| {
                alt.split_whitespace()
                    .map(Compound::parse)
                    .collect::<Option<Vec<_>>>()
                    .filter(|chain| !chain.is_empty())
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Self { alternatives })
    }
}

impl Compound {
    fn parse(input: &str) -> Option<Self> {
        let mut compound = Compound::default();
        let mut rest = input;

        let tag_end = rest.find(['.', '#', '[']).unwrap_or(rest.len());
        if tag_end > 0 {
            let tag = &rest[..tag_end];
            if tag != "*" {
                compound.tag = Some(tag.to_ascii_lowercase());
            }
            rest = &rest[tag_end..];
        }

        while let Some(marker) = rest.chars().next() {
            rest = &rest[marker.len_utf8()..];
            match marker {
                '.' | '#' => {
                    let end = rest.find(['.', '#', '[']).unwrap_or(rest.len());
                    let name = &rest[..end];
                    if name.is_empty() {
                        return None;
                    }
                    if marker == '.' {
                        compound.classes.push(name.to_string());
                    } else {
                        compound.id = Some(name.to_string());
                    }
                    rest = &rest[end..];
                }
                '[' => {
                    let end = rest.find(']')?;
                    let body = &rest[..end];
                    let attribute = match body.split_once('=') {
                        Some((name, value)) => (
                            name.to_string(),
                            Some(value.trim_matches(|c| c == '"' || c == '\'').to_string()),
                        ),
                        None => (body.to_string(), None),
                    };
                    if attribute.0.is_empty() {
                        return None;
                    }
                    compound.attributes.push(attribute);
                    rest = &rest[end + 1..];
                }
                _ => return None,
            }
        }
        Some(compound)
    }

    fn matches(&self, node: &FakeNode) -> bool {
        if self.tag.as_ref().is_some_and(|tag| *tag != node.tag) {
            return false;
        }
        if self
            .id
            .as_ref()
            .is_some_and(|id| node.attributes.get("id") != Some(id))
        {
            return false;
        }
        if !self.classes.iter().all(|class| node.classes.contains(class)) {
            return false;
        }
        self.attributes.iter().all(|(name, value)| match (node.attributes.get(name), value) {
            (Some(actual), Some(expected)) => actual == expected,
            (Some(_), None) => true,
            (None, _) => false,
        })
    }
}
