//! Mutable HTML document tree.
//!
//! # Module Structure
//!
//! ```text
//! dom/
//! ├── class     # class attribute token helpers
//! ├── parse     # HTML source -> Document (via tl)
//! ├── render    # Document -> HTML source
//! └── mod.rs    # arena tree and traversal (this file)
//! ```
//!
//! The tree is arena-backed: nodes live in a flat `Vec` and reference each
//! other by [`NodeId`], with parent links so ancestor traversal is a plain
//! upward walk. Text, comments, and attribute values are kept verbatim from
//! the source; serialization re-emits them untouched, so a document that no
//! pass modifies round-trips byte-for-byte (modulo the markup the parser
//! itself drops).

pub mod class;
mod parse;
mod render;

use smallvec::SmallVec;

// ============================================================================
// Node identity and kinds
// ============================================================================

/// Index of a node within its [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Node payload.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Synthetic document root; never rendered.
    Root,
    Element(Element),
    /// Raw text, entities intact.
    Text(String),
    /// Comment contents as found in the source.
    Comment(String),
}

/// An element tag with its attributes.
///
/// Attribute values are `None` for boolean attributes (`disabled`), which
/// round-trip without an `=""`.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    attrs: Vec<(String, Option<String>)>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
        }
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.attrs.iter().position(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// Get an attribute value. Boolean attributes yield `Some("")`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.find(name)
            .map(|i| self.attrs[i].1.as_deref().unwrap_or_default())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Set or replace an attribute value.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.find(name) {
            Some(i) => self.attrs[i].1 = Some(value.to_string()),
            None => self.attrs.push((name.to_string(), Some(value.to_string()))),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        if let Some(i) = self.find(name) {
            self.attrs.remove(i);
        }
    }

    /// Append a raw attribute during parsing (keeps source order).
    pub(crate) fn push_attr(&mut self, name: &str, value: Option<String>) {
        self.attrs.push((name.to_string(), value));
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_deref()))
    }

    // ------------------------------------------------------------------------
    // Class token helpers (additive; prior classes are never disturbed)
    // ------------------------------------------------------------------------

    /// Whether the class attribute contains `token` as a whole token.
    pub fn has_class(&self, token: &str) -> bool {
        self.attr("class").is_some_and(|c| class::has_token(c, token))
    }

    /// Append a class token, leaving existing tokens in place.
    pub fn add_class(&mut self, token: &str) {
        let next = match self.attr("class") {
            Some(existing) => class::append_token(existing, token),
            None => token.to_string(),
        };
        self.set_attr("class", &next);
    }

    /// Remove a single class token; drops the attribute when nothing remains.
    pub fn remove_class(&mut self, token: &str) {
        let Some(existing) = self.attr("class") else {
            return;
        };
        let next = class::remove_token(existing, token);
        if next.is_empty() {
            self.remove_attr("class");
        } else {
            self.set_attr("class", &next);
        }
    }
}

// ============================================================================
// Document arena
// ============================================================================

#[derive(Debug)]
struct NodeData {
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    kind: NodeKind,
}

/// An HTML document as a mutable arena tree.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
    /// Leading doctype, with any whitespace before it, re-emitted verbatim.
    pub(crate) doctype: Option<String>,
}

impl Document {
    /// Create a document holding only the synthetic root.
    pub(crate) fn empty() -> Self {
        Self {
            nodes: vec![NodeData {
                parent: None,
                children: SmallVec::new(),
                kind: NodeKind::Root,
            }],
            doctype: None,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn push_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            parent: None,
            children: SmallVec::new(),
            kind,
        });
        id
    }

    /// Create a detached element node.
    pub fn create_element(&mut self, element: Element) -> NodeId {
        self.push_node(NodeKind::Element(element))
    }

    pub(crate) fn create_text(&mut self, text: String) -> NodeId {
        self.push_node(NodeKind::Text(text))
    }

    pub(crate) fn create_comment(&mut self, contents: String) -> NodeId {
        self.push_node(NodeKind::Comment(contents))
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// The element payload of a node, if it is one.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.index()].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[id.index()].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Lowercased tag name of an element node.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.tag.as_str())
    }

    /// All node ids in arena order (stable across mutation; new nodes append).
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Ids of elements with the given tag name, in document order.
    pub fn elements_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = NodeId> + 'a {
        self.node_ids()
            .filter(move |&id| self.tag(id) == Some(tag))
    }

    /// Concatenated descendant text, verbatim from the source.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.kind(id) {
            NodeKind::Text(t) => out.push_str(t),
            NodeKind::Comment(_) => {}
            NodeKind::Root | NodeKind::Element(_) => {
                for &child in self.children(id) {
                    self.collect_text(child, out);
                }
            }
        }
    }

    // ------------------------------------------------------------------------
    // Traversal
    // ------------------------------------------------------------------------

    /// Walk upward from `id`, returning the first ancestor satisfying the
    /// predicate, or `None` when the root is reached. Pure traversal.
    pub fn find_ancestor<F>(&self, id: NodeId, predicate: F) -> Option<NodeId>
    where
        F: Fn(&Document, NodeId) -> bool,
    {
        let mut current = self.parent(id);
        while let Some(node) = current {
            if predicate(self, node) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    // ------------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------------

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[parent.index()].children.push(child);
        self.nodes[child.index()].parent = Some(parent);
    }

    /// Splice `new` into the tree immediately before `reference`.
    ///
    /// No-op when `reference` is detached or the root.
    pub fn insert_before(&mut self, new: NodeId, reference: NodeId) {
        let Some(parent) = self.parent(reference) else {
            return;
        };
        self.detach(new);
        let children = &mut self.nodes[parent.index()].children;
        let position = children
            .iter()
            .position(|&c| c == reference)
            .unwrap_or(children.len());
        children.insert(position, new);
        self.nodes[new.index()].parent = Some(parent);
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.index()].parent {
            self.nodes[parent.index()].children.retain(|&mut c| c != id);
            self.nodes[id.index()].parent = None;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
