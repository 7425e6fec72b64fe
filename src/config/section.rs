//! Configuration sections for `burnish.toml`.
//!
//! # Example
//!
//! ```toml
//! [site]
//! dir = "public"
//!
//! [code]
//! prefix = "language-"
//!
//! [latex]
//! endpoint = "https://latex.example.com/render"
//! param = "t"
//!
//! [table]
//! class = "table"
//!
//! [nav]
//! active_class = "active"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[site]` - where the generated HTML lives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site HTML root, relative to the config file's directory.
    pub dir: PathBuf,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public"),
        }
    }
}

/// `[code]` - code block tagging for the syntax highlighter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeConfig {
    pub enable: bool,

    /// Class prefix the highlighter recognizes.
    pub prefix: String,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            enable: true,
            prefix: "language-".to_string(),
        }
    }
}

/// `[latex]` - LaTeX code block rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LatexConfig {
    pub enable: bool,

    /// Class marking a code block as LaTeX source.
    pub class: String,

    /// Equation-rendering image endpoint. Scheme-relative URLs are accepted.
    pub endpoint: String,

    /// Query parameter carrying the URL-encoded equation.
    pub param: String,
}

impl Default for LatexConfig {
    fn default() -> Self {
        Self {
            enable: true,
            class: "latex".to_string(),
            endpoint: "//menteslibres.net/api/latex/png".to_string(),
            param: "t".to_string(),
        }
    }
}

/// `[table]` - default styling for unclassed tables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub enable: bool,

    /// Class assigned to tables that have none.
    pub class: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            enable: true,
            class: "table".to_string(),
        }
    }
}

/// `[nav]` - active navigation marking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub enable: bool,

    /// Marker class for the current page's navigation entry.
    pub active_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            enable: true,
            active_class: "active".to_string(),
        }
    }
}
