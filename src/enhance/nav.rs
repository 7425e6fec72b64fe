//! Active navigation marking pass.
//!
//! Marks the navigation entry pointing at the current page. Every anchor in
//! the document is compared against the page route by exact equality of
//! slash-stripped paths; a match marks the anchor's nearest `li` ancestor,
//! or the anchor itself when it sits outside a list. Duplicate navigation
//! regions (header and footer menus) all get marked.
//!
//! Stale markers from a previous run are stripped first, so the pass
//! converges: two runs leave the same set of marked elements as one. The
//! touch count is the number of elements whose marker state actually
//! changed, so an already-correct page reports zero.

use rustc_hash::FxHashSet;

use crate::config::NavConfig;
use crate::core::RoutePath;
use crate::dom::{Document, NodeId};

use super::Pass;

/// Marks the current page's navigation entries with the active class.
pub struct ActiveNav<'a> {
    config: &'a NavConfig,
    route: &'a RoutePath,
}

impl<'a> ActiveNav<'a> {
    pub fn new(config: &'a NavConfig, route: &'a RoutePath) -> Self {
        Self { config, route }
    }

    /// Every element currently carrying the active marker.
    fn marked(&self, doc: &Document) -> FxHashSet<NodeId> {
        let active = &self.config.active_class;
        doc.node_ids()
            .filter(|&id| {
                doc.element(id).is_some_and(|el| {
                    matches!(el.tag.as_str(), "li" | "a") && el.has_class(active)
                })
            })
            .collect()
    }

    /// Strip the active marker from every navigation item.
    fn reset(&self, doc: &mut Document) {
        for id in self.marked(doc) {
            if let Some(el) = doc.element_mut(id) {
                el.remove_class(&self.config.active_class);
            }
        }
    }

    /// Mark the container of every matching anchor.
    fn mark(&self, doc: &mut Document) {
        let anchors: Vec<NodeId> = doc.elements_by_tag("a").collect();

        for anchor in anchors {
            let matches = doc
                .element(anchor)
                .is_some_and(|el| self.route.matches_href(el.attr("href")));
            if !matches {
                continue;
            }

            // Nearest list-item ancestor, or the anchor itself
            let target = doc
                .find_ancestor(anchor, |d, id| d.tag(id) == Some("li"))
                .unwrap_or(anchor);

            if let Some(el) = doc.element_mut(target)
                && !el.has_class(&self.config.active_class)
            {
                el.add_class(&self.config.active_class);
            }
        }
    }
}

impl Pass for ActiveNav<'_> {
    fn name(&self) -> &'static str {
        "nav"
    }

    /// Recompute the marker set and report how many elements changed state.
    /// Stripping a stale marker counts; re-marking the same element does not.
    fn apply(&self, doc: &mut Document) -> usize {
        let before = self.marked(doc);
        self.reset(doc);
        self.mark(doc);
        let after = self.marked(doc);
        before.symmetric_difference(&after).count()
    }
}
