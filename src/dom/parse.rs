//! HTML source to [`Document`] conversion using the `tl` parser.

use anyhow::{Result, anyhow};

use super::{Document, Element, NodeId};

impl Document {
    /// Parse HTML source into a mutable tree.
    ///
    /// A malformed document is not an error at this layer: `tl` recovers by
    /// skipping what it cannot place, which simply leaves fewer elements to
    /// enhance.
    pub fn parse(html: &str) -> Result<Self> {
        let (doctype, body) = split_doctype(html);
        let dom = tl::parse(body, tl::ParserOptions::default())
            .map_err(|e| anyhow!("HTML parse failed: {e}"))?;
        let parser = dom.parser();

        let mut doc = Document::empty();
        doc.doctype = doctype.map(str::to_string);

        let root = doc.root();
        for handle in dom.children() {
            copy_node(&mut doc, root, *handle, parser);
        }

        Ok(doc)
    }
}

/// Convert a tl node (and its subtree) into arena nodes under `parent`.
fn copy_node(doc: &mut Document, parent: NodeId, handle: tl::NodeHandle, parser: &tl::Parser) {
    let Some(node) = handle.get(parser) else {
        return;
    };

    match node {
        tl::Node::Tag(tag) => {
            let name = tag.name().as_utf8_str().to_lowercase();

            // A leading doctype is split off before parsing; any other
            // markup declaration is parser-dropped territory.
            if name.starts_with('!') {
                return;
            }

            let mut element = Element::new(&name);
            for (key, value) in tag.attributes().iter() {
                let key: &str = key.as_ref();
                element.push_attr(key, value.map(|v| v.to_string()));
            }

            let id = doc.create_element(element);
            doc.append_child(parent, id);

            for child in tag.children().top().iter() {
                copy_node(doc, id, *child, parser);
            }
        }
        tl::Node::Raw(bytes) => {
            // Whitespace-only runs are kept: output mirrors the source.
            let id = doc.create_text(bytes.as_utf8_str().to_string());
            doc.append_child(parent, id);
        }
        tl::Node::Comment(bytes) => {
            let id = doc.create_comment(bytes.as_utf8_str().to_string());
            doc.append_child(parent, id);
        }
    }
}

/// Split a leading doctype declaration, along with any whitespace before
/// it, from the markup that follows. Both halves stay verbatim.
fn split_doctype(html: &str) -> (Option<&str>, &str) {
    let offset = html.len() - html.trim_start().len();
    let rest = &html[offset..];
    if is_doctype(rest)
        && let Some(end) = rest.find('>')
    {
        let split = offset + end + 1;
        return (Some(&html[..split]), &html[split..]);
    }
    (None, html)
}

fn is_doctype(s: &str) -> bool {
    s.get(..9).is_some_and(|head| head.eq_ignore_ascii_case("<!doctype"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeKind;

    #[test]
    fn test_parse_basic_structure() {
        let doc = Document::parse("<div><p>hi</p></div>").unwrap();
        let div = doc.elements_by_tag("div").next().unwrap();
        let p = doc.elements_by_tag("p").next().unwrap();
        assert_eq!(doc.parent(p), Some(div));
        assert_eq!(doc.text_content(p), "hi");
    }

    #[test]
    fn test_parse_keeps_attributes_in_order() {
        let doc = Document::parse(r#"<a href="/x" class="nav" data-k>go</a>"#).unwrap();
        let a = doc.elements_by_tag("a").next().unwrap();
        let el = doc.element(a).unwrap();
        let attrs: Vec<_> = el.attrs().map(|(n, _)| n.to_string()).collect();
        assert_eq!(attrs, ["href", "class", "data-k"]);
        assert_eq!(el.attr("href"), Some("/x"));
        assert_eq!(el.attr("data-k"), Some(""));
    }

    #[test]
    fn test_parse_detects_doctype() {
        let doc = Document::parse("<!DOCTYPE html>\n<html><body></body></html>").unwrap();
        assert_eq!(doc.doctype.as_deref(), Some("<!DOCTYPE html>"));
    }

    #[test]
    fn test_whitespace_before_doctype_is_kept() {
        let html = "\n  <!DOCTYPE html>\n<html><body></body></html>";
        let doc = Document::parse(html).unwrap();
        assert_eq!(doc.doctype.as_deref(), Some("\n  <!DOCTYPE html>"));
        assert_eq!(doc.render(), html);
    }

    #[test]
    fn test_split_doctype() {
        assert_eq!(split_doctype("<p>x</p>"), (None, "<p>x</p>"));
        assert_eq!(
            split_doctype("<!doctype html><p>x</p>"),
            (Some("<!doctype html>"), "<p>x</p>")
        );
        // Unterminated declaration is left to the parser
        assert_eq!(split_doctype("<!DOCTYPE"), (None, "<!DOCTYPE"));
    }

    #[test]
    fn test_parse_keeps_entities_verbatim() {
        let doc = Document::parse("<p>a &amp; b</p>").unwrap();
        let p = doc.elements_by_tag("p").next().unwrap();
        assert_eq!(doc.text_content(p), "a &amp; b");
    }

    #[test]
    fn test_parse_empty_document() {
        let doc = Document::parse("").unwrap();
        assert!(doc.children(doc.root()).is_empty());
    }

    #[test]
    fn test_parse_keeps_whitespace_text() {
        let doc = Document::parse("<ul>\n  <li>x</li>\n</ul>").unwrap();
        let ul = doc.elements_by_tag("ul").next().unwrap();
        let has_ws_text = doc.children(ul).iter().any(|&c| {
            matches!(doc.kind(c), NodeKind::Text(t) if t.chars().all(char::is_whitespace))
        });
        assert!(has_ws_text);
    }
}
