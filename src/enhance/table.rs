//! Table styling pass.
//!
//! Tables the author left unclassed receive the site's default table class.
//! A table that already carries any class is never revisited.

use crate::config::TableConfig;
use crate::dom::{Document, NodeId};

use super::Pass;

/// Assigns the default class to classless tables.
pub struct TableStyle<'a> {
    config: &'a TableConfig,
}

impl<'a> TableStyle<'a> {
    pub fn new(config: &'a TableConfig) -> Self {
        Self { config }
    }
}

impl Pass for TableStyle<'_> {
    fn name(&self) -> &'static str {
        "table"
    }

    fn apply(&self, doc: &mut Document) -> usize {
        let ids: Vec<NodeId> = doc.elements_by_tag("table").collect();

        let mut touched = 0;
        for id in ids {
            let Some(el) = doc.element_mut(id) else {
                continue;
            };
            // An empty class attribute counts as unclassed
            let unclassed = el.attr("class").is_none_or(|c| c.trim().is_empty());
            if unclassed {
                el.set_attr("class", &self.config.class);
                touched += 1;
            }
        }
        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_class(doc: &Document) -> Option<String> {
        let table = doc.elements_by_tag("table").next().unwrap();
        doc.element(table)
            .unwrap()
            .attr("class")
            .map(str::to_string)
    }

    #[test]
    fn test_unclassed_table_gets_default() {
        let config = TableConfig::default();
        let mut doc = Document::parse("<table><tr><td>x</td></tr></table>").unwrap();
        let touched = TableStyle::new(&config).apply(&mut doc);
        assert_eq!(touched, 1);
        assert_eq!(table_class(&doc).as_deref(), Some("table"));
    }

    #[test]
    fn test_classed_table_untouched() {
        let config = TableConfig::default();
        let mut doc =
            Document::parse(r#"<table class="fancy"><tr><td>x</td></tr></table>"#).unwrap();
        let touched = TableStyle::new(&config).apply(&mut doc);
        assert_eq!(touched, 0);
        assert_eq!(table_class(&doc).as_deref(), Some("fancy"));
    }

    #[test]
    fn test_rerun_adds_class_once() {
        let config = TableConfig::default();
        let mut doc = Document::parse("<table></table>").unwrap();
        TableStyle::new(&config).apply(&mut doc);
        let touched = TableStyle::new(&config).apply(&mut doc);
        assert_eq!(touched, 0);
        assert_eq!(table_class(&doc).as_deref(), Some("table"));
    }

    #[test]
    fn test_empty_class_treated_as_unclassed() {
        let config = TableConfig::default();
        let mut doc = Document::parse(r#"<table class=""></table>"#).unwrap();
        TableStyle::new(&config).apply(&mut doc);
        assert_eq!(table_class(&doc).as_deref(), Some("table"));
    }
}
