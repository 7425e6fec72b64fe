//! Page enhancement passes.
//!
//! Four independent, order-insensitive passes over one parsed page:
//!
//! | Pass    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `code`  | tag `code` elements with a `language-*` class           |
//! | `latex` | render LaTeX code blocks as remote images               |
//! | `table` | give classless tables the default table class           |
//! | `nav`   | mark the navigation entry of the current page as active |
//!
//! Every pass is idempotent: running `enhance_page` twice leaves the
//! document in the same state as running it once.

pub mod code;
pub mod latex;
pub mod nav;
pub mod table;

pub use code::CodeTagger;
pub use latex::LatexImages;
pub use nav::ActiveNav;
pub use table::TableStyle;

use rustc_hash::FxHashMap;

use crate::config::SiteConfig;
use crate::core::RoutePath;
use crate::debug;
use crate::dom::Document;

/// Pass names in reporting order.
pub const PASS_ORDER: [&str; 4] = ["code", "latex", "table", "nav"];

/// A single enhancement pass over a document.
pub trait Pass {
    fn name(&self) -> &'static str;

    /// Apply the pass, returning how many elements it touched.
    fn apply(&self, doc: &mut Document) -> usize;
}

// ============================================================================
// Stats
// ============================================================================

/// Per-pass touch counts for one page (or aggregated over a run).
#[derive(Debug, Default, Clone)]
pub struct PageStats {
    touched: FxHashMap<&'static str, usize>,
}

impl PageStats {
    fn record(&mut self, pass: &'static str, count: usize) {
        *self.touched.entry(pass).or_default() += count;
    }

    pub fn count(&self, pass: &str) -> usize {
        self.touched.get(pass).copied().unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.touched.values().sum()
    }

    /// Whether any pass changed the page.
    pub fn changed(&self) -> bool {
        self.total() > 0
    }

    pub fn merge(&mut self, other: &PageStats) {
        for (pass, count) in &other.touched {
            *self.touched.entry(pass).or_default() += count;
        }
    }

    /// One-line summary: `code(3) latex(1) table(2) nav(5)`.
    pub fn summary(&self) -> String {
        PASS_ORDER
            .iter()
            .map(|pass| format!("{}({})", pass, self.count(pass)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Run every enabled pass over one page.
///
/// The passes share nothing and are order-insensitive; the fixed order here
/// only makes logs deterministic.
pub fn enhance_page(doc: &mut Document, route: &RoutePath, config: &SiteConfig) -> PageStats {
    let mut passes: Vec<Box<dyn Pass + '_>> = Vec::with_capacity(PASS_ORDER.len());
    if config.code.enable {
        passes.push(Box::new(CodeTagger::new(&config.code)));
    }
    if config.latex.enable {
        passes.push(Box::new(LatexImages::new(&config.latex)));
    }
    if config.table.enable {
        passes.push(Box::new(TableStyle::new(&config.table)));
    }
    if config.nav.enable {
        passes.push(Box::new(ActiveNav::new(&config.nav, route)));
    }

    let mut stats = PageStats::default();
    for pass in passes {
        let touched = pass.apply(doc);
        if touched > 0 {
            debug!("enhance"; "{}: touched {} element(s)", pass.name(), touched);
        }
        stats.record(pass.name(), touched);
    }
    stats
}
