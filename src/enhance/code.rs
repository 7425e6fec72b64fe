//! Code block tagging pass.
//!
//! An external syntax highlighter recognizes `language-<name>` classes.
//! Authors write `<code class="python">`; this pass appends the derived
//! `language-python` so the highlighter picks the block up. Classless code
//! elements are left alone.

use crate::config::CodeConfig;
use crate::dom::{Document, NodeId, class};

use super::Pass;

/// Appends a `language-*` class derived from a code element's first class
/// token.
pub struct CodeTagger<'a> {
    config: &'a CodeConfig,
}

impl<'a> CodeTagger<'a> {
    pub fn new(config: &'a CodeConfig) -> Self {
        Self { config }
    }
}

impl Pass for CodeTagger<'_> {
    fn name(&self) -> &'static str {
        "code"
    }

    fn apply(&self, doc: &mut Document) -> usize {
        let ids: Vec<NodeId> = doc.elements_by_tag("code").collect();
        let prefix = &self.config.prefix;

        let mut touched = 0;
        for id in ids {
            let Some(el) = doc.element_mut(id) else {
                continue;
            };
            let Some(classes) = el.attr("class") else {
                continue;
            };
            let Some(token) = class::first_token(classes) else {
                continue;
            };
            // Already a highlighter class, or tagged on a previous run
            if token.starts_with(prefix.as_str()) {
                continue;
            }
            let derived = format!("{prefix}{token}");
            if class::has_token(classes, &derived) {
                continue;
            }
            el.add_class(&derived);
            touched += 1;
        }
        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Document {
        let config = CodeConfig::default();
        let mut doc = Document::parse(html).unwrap();
        CodeTagger::new(&config).apply(&mut doc);
        doc
    }

    fn code_class(doc: &Document) -> Option<String> {
        let code = doc.elements_by_tag("code").next().unwrap();
        doc.element(code)
            .unwrap()
            .attr("class")
            .map(str::to_string)
    }

    #[test]
    fn test_tags_classed_code() {
        let doc = run(r#"<code class="python">print()</code>"#);
        assert_eq!(code_class(&doc).as_deref(), Some("python language-python"));
    }

    #[test]
    fn test_skips_classless_code() {
        let doc = run("<code>plain</code>");
        assert_eq!(code_class(&doc), None);
    }

    #[test]
    fn test_skips_empty_class() {
        let doc = run(r#"<code class="">plain</code>"#);
        assert_eq!(code_class(&doc).as_deref(), Some(""));
    }

    #[test]
    fn test_uses_first_token_only() {
        let doc = run(r#"<code class="rust linenos">fn</code>"#);
        assert_eq!(
            code_class(&doc).as_deref(),
            Some("rust linenos language-rust")
        );
    }

    #[test]
    fn test_rerun_adds_nothing() {
        let config = CodeConfig::default();
        let mut doc = Document::parse(r#"<code class="go">x</code>"#).unwrap();
        CodeTagger::new(&config).apply(&mut doc);
        let touched = CodeTagger::new(&config).apply(&mut doc);
        assert_eq!(touched, 0);
        assert_eq!(code_class(&doc).as_deref(), Some("go language-go"));
    }

    #[test]
    fn test_skips_already_prefixed_class() {
        let doc = run(r#"<code class="language-rust">fn</code>"#);
        assert_eq!(code_class(&doc).as_deref(), Some("language-rust"));
    }
}
