//! [`Document`] to HTML source serialization.

use std::borrow::Cow;
use std::fmt::Write;

use super::{Document, NodeId, NodeKind};

impl Document {
    /// Serialize the tree back to HTML.
    ///
    /// Text and attribute values are emitted verbatim (entities in the
    /// source stay as written); only `"` is escaped in attribute values,
    /// since serialization always double-quotes them.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.nodes.len() * 32);
        if let Some(doctype) = &self.doctype {
            out.push_str(doctype);
        }
        for &child in self.children(self.root()) {
            self.render_node(child, &mut out);
        }
        out
    }

    fn render_node(&self, id: NodeId, out: &mut String) {
        match self.kind(id) {
            NodeKind::Root => {
                for &child in self.children(id) {
                    self.render_node(child, out);
                }
            }
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Comment(contents) => {
                // tl hands comments over with their delimiters; tolerate
                // bare contents from nodes built by hand.
                if contents.starts_with("<!") {
                    out.push_str(contents);
                } else {
                    let _ = write!(out, "<!--{contents}-->");
                }
            }
            NodeKind::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                for (name, value) in el.attrs() {
                    out.push(' ');
                    out.push_str(name);
                    if let Some(value) = value {
                        let _ = write!(out, "=\"{}\"", escape_attr(value));
                    }
                }
                out.push('>');

                if is_void_element(&el.tag) {
                    return;
                }

                for &child in self.children(id) {
                    self.render_node(child, out);
                }

                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }
}

/// Escape `"` in a double-quoted attribute value.
fn escape_attr(value: &str) -> Cow<'_, str> {
    if value.contains('"') {
        Cow::Owned(value.replace('"', "&quot;"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Check if an HTML tag is a void element (no closing tag).
#[inline]
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}
