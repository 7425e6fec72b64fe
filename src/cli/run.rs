//! The `run` and `check` commands.
//!
//! Both walk the site directory, parse every HTML page, and apply the
//! enhancement passes. `run` writes changed pages back in place; `check`
//! only reports how many pages would change and exits nonzero when any
//! would. A page that fails to read or parse is logged and skipped - a
//! malformed site means fewer pages enhanced, never an aborted run.

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::dom::Document;
use crate::enhance::{self, PageStats};
use crate::log;
use crate::logger::ProgressLine;
use crate::site::{self, Page};

/// How the command treats changed pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Write enhanced pages back in place; `dry` previews without writing.
    Write { dry: bool },
    /// Report only; nonzero exit when any page would change.
    Check,
}

/// Entry point for `run` and `check`.
pub fn enhance_site(config: &SiteConfig, cli_dir: Option<&Path>, mode: Mode) -> Result<()> {
    let dir = config.site_dir(cli_dir);
    if !dir.is_dir() {
        bail!("site directory `{}` not found", dir.display());
    }

    let pages = site::collect_pages(&dir);
    if pages.is_empty() {
        log!("run"; "no HTML pages under {}", dir.display());
        return Ok(());
    }

    let write = matches!(mode, Mode::Write { dry: false });
    let progress = ProgressLine::new(&[("pages", pages.len())]);

    let outcomes: Vec<Option<PageStats>> = pages
        .par_iter()
        .map(|page| {
            let outcome = enhance_file(page, config, write);
            progress.inc("pages");
            match outcome {
                Ok(stats) => Some(stats),
                Err(e) => {
                    log!("error"; "{}: {e:#}", page.file.display());
                    None
                }
            }
        })
        .collect();

    progress.finish();

    let mut totals = PageStats::default();
    let mut changed = 0usize;
    let mut failed = 0usize;
    for outcome in &outcomes {
        match outcome {
            Some(stats) => {
                if stats.changed() {
                    changed += 1;
                }
                totals.merge(stats);
            }
            None => failed += 1,
        }
    }

    if failed > 0 {
        log!("warning"; "skipped {} unreadable page(s)", failed);
    }

    match mode {
        Mode::Write { dry } => {
            let verb = if dry { "would enhance" } else { "enhanced" };
            log!(
                "run";
                "{verb} {changed} of {} page(s): {}",
                pages.len(),
                totals.summary()
            );
        }
        Mode::Check => {
            if changed > 0 {
                log!("check"; "{changed} of {} page(s) need enhancement: {}",
                    pages.len(), totals.summary());
                std::process::exit(1);
            }
            log!("check"; "all {} page(s) clean", pages.len());
        }
    }

    Ok(())
}

/// Enhance a single page, writing it back when it changed and `write` is set.
fn enhance_file(page: &Page, config: &SiteConfig, write: bool) -> Result<PageStats> {
    let source = fs::read_to_string(&page.file)
        .with_context(|| format!("failed to read {}", page.file.display()))?;

    let mut doc = Document::parse(&source)?;
    let stats = enhance::enhance_page(&mut doc, &page.route, config);

    if stats.changed() && write {
        fs::write(&page.file, doc.render())
            .with_context(|| format!("failed to write {}", page.file.display()))?;
    }

    Ok(stats)
}
