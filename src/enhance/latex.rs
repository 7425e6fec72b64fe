//! LaTeX code block rendering pass.
//!
//! Code blocks classed as LaTeX are replaced visually by an image from a
//! remote equation-rendering endpoint: an `img` is inserted immediately
//! before the block, its `src` carrying the URL-encoded equation text, and
//! the original block is hidden inline. The endpoint is never contacted
//! here - if it is unreachable the browser shows a broken image, which is
//! the accepted degradation.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::LatexConfig;
use crate::dom::{Document, Element, NodeId};

use super::Pass;

/// Inserts rendered-equation images before LaTeX code blocks and hides the
/// blocks themselves.
pub struct LatexImages<'a> {
    config: &'a LatexConfig,
}

impl<'a> LatexImages<'a> {
    pub fn new(config: &'a LatexConfig) -> Self {
        Self { config }
    }

    /// Build the rendering endpoint URL for one equation.
    fn image_url(&self, formula: &str) -> String {
        let encoded = utf8_percent_encode(formula, NON_ALPHANUMERIC);
        format!("{}?{}={}", self.config.endpoint, self.config.param, encoded)
    }
}

impl Pass for LatexImages<'_> {
    fn name(&self) -> &'static str {
        "latex"
    }

    fn apply(&self, doc: &mut Document) -> usize {
        // A block hidden on a previous run already has its image
        let targets: Vec<(NodeId, String)> = doc
            .elements_by_tag("code")
            .filter(|&id| {
                doc.element(id)
                    .is_some_and(|el| el.has_class(&self.config.class) && !is_hidden(el))
            })
            .map(|id| (id, doc.text_content(id)))
            .collect();

        let count = targets.len();
        for (id, formula) in targets {
            let mut img = Element::new("img");
            img.set_attr("src", &self.image_url(&formula));
            img.set_attr("alt", &formula);

            let img_id = doc.create_element(img);
            doc.insert_before(img_id, id);

            if let Some(el) = doc.element_mut(id) {
                hide(el);
            }
        }
        count
    }
}

fn is_hidden(el: &Element) -> bool {
    el.attr("style")
        .is_some_and(|s| s.replace(' ', "").contains("display:none"))
}

/// Hide an element by appending to its inline style, keeping whatever
/// styling the author already set.
fn hide(el: &mut Element) {
    let style = match el.attr("style") {
        Some(existing) if !existing.trim().is_empty() => {
            let existing = existing.trim_end();
            if existing.ends_with(';') {
                format!("{existing} display:none")
            } else {
                format!("{existing}; display:none")
            }
        }
        _ => "display:none".to_string(),
    };
    el.set_attr("style", &style);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Document {
        let config = LatexConfig::default();
        let mut doc = Document::parse(html).unwrap();
        LatexImages::new(&config).apply(&mut doc);
        doc
    }

    #[test]
    fn test_inserts_image_before_block() {
        let doc = run(r#"<p><code class="latex">E = mc^2</code></p>"#);
        let p = doc.elements_by_tag("p").next().unwrap();
        let children = doc.children(p);
        assert_eq!(doc.tag(children[0]), Some("img"));
        assert_eq!(doc.tag(children[1]), Some("code"));
    }

    #[test]
    fn test_image_src_is_url_encoded() {
        let doc = run(r#"<code class="latex">a + b</code>"#);
        let img = doc.elements_by_tag("img").next().unwrap();
        let src = doc.element(img).unwrap().attr("src").unwrap();
        assert_eq!(src, "//menteslibres.net/api/latex/png?t=a%20%2B%20b");
    }

    #[test]
    fn test_original_block_is_hidden() {
        let doc = run(r#"<code class="latex">x</code>"#);
        let code = doc.elements_by_tag("code").next().unwrap();
        let style = doc.element(code).unwrap().attr("style").unwrap();
        assert_eq!(style, "display:none");
    }

    #[test]
    fn test_existing_style_is_kept() {
        let doc = run(r#"<code class="latex" style="color:red">x</code>"#);
        let code = doc.elements_by_tag("code").next().unwrap();
        let style = doc.element(code).unwrap().attr("style").unwrap();
        assert_eq!(style, "color:red; display:none");
    }

    #[test]
    fn test_other_code_untouched() {
        let doc = run(r#"<code class="python">print()</code>"#);
        assert!(doc.elements_by_tag("img").next().is_none());
    }

    #[test]
    fn test_rerun_inserts_no_second_image() {
        let config = LatexConfig::default();
        let mut doc = Document::parse(r#"<code class="latex">x</code>"#).unwrap();
        LatexImages::new(&config).apply(&mut doc);
        let touched = LatexImages::new(&config).apply(&mut doc);
        assert_eq!(touched, 0);
        assert_eq!(doc.elements_by_tag("img").count(), 1);
    }

    #[test]
    fn test_custom_endpoint() {
        let config = LatexConfig {
            endpoint: "https://latex.example.com/render".to_string(),
            ..LatexConfig::default()
        };
        let mut doc = Document::parse(r#"<code class="latex">x</code>"#).unwrap();
        LatexImages::new(&config).apply(&mut doc);
        let img = doc.elements_by_tag("img").next().unwrap();
        let src = doc.element(img).unwrap().attr("src").unwrap();
        assert_eq!(src, "https://latex.example.com/render?t=x");
    }
}
