//! Configuration management for `burnish.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                     |
//! |-----------|---------------------------------------------|
//! | `[site]`  | Site HTML root directory                    |
//! | `[code]`  | Code block tagging (highlighter prefix)     |
//! | `[latex]` | LaTeX rendering endpoint                    |
//! | `[table]` | Default table class                         |
//! | `[nav]`   | Active navigation marker class              |
//!
//! All sections are optional; a missing config file means all defaults.
//! Unknown fields are reported, not silently ignored.

mod error;
mod section;

pub use error::ConfigError;
pub use section::{CodeConfig, LatexConfig, NavConfig, SiteSection, TableConfig};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use url::Url;

use crate::cli::Cli;
use crate::log;

/// Root configuration structure representing burnish.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    pub site: SiteSection,
    pub code: CodeConfig,
    pub latex: LatexConfig,
    pub table: TableConfig,
    pub nav: NavConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSection::default(),
            code: CodeConfig::default(),
            latex: LatexConfig::default(),
            table: TableConfig::default(),
            nav: NavConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file; a missing file is not
    /// an error - every option has a default - but a malformed one is.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = path;
                config
            }
            None => {
                let cwd = std::env::current_dir().unwrap_or_default();
                let mut config = Self::default();
                config.config_path = cwd.join(&cli.config);
                config.root = cwd;
                config
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Resolve the site directory: CLI argument wins over `[site].dir`;
    /// relative paths are anchored at the project root.
    pub fn site_dir(&self, cli_dir: Option<&Path>) -> PathBuf {
        let dir = cli_dir.unwrap_or(&self.site.dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.root.join(dir)
        }
    }

    // ========================================================================
    // Validation
    // ========================================================================

    fn validate(&self) -> Result<()> {
        check_token("code.prefix", &self.code.prefix)?;
        check_token("latex.class", &self.latex.class)?;
        check_token("latex.param", &self.latex.param)?;
        check_token("table.class", &self.table.class)?;
        check_token("nav.active_class", &self.nav.active_class)?;
        check_endpoint(&self.latex.endpoint)?;
        Ok(())
    }
}

/// Search upward from cwd for the config file.
fn find_config_file(name: &Path) -> Option<PathBuf> {
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Class names and query parameters must be single non-empty tokens.
fn check_token(field: &str, value: &str) -> Result<()> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "`{field}` must be a single non-empty token, got {value:?}"
        ))
        .into());
    }
    Ok(())
}

/// The LaTeX endpoint must be an absolute, scheme-relative, or site-root URL.
fn check_endpoint(endpoint: &str) -> Result<()> {
    let parseable = if let Some(rest) = endpoint.strip_prefix("//") {
        format!("https://{rest}")
    } else if endpoint.starts_with('/') {
        return Ok(());
    } else {
        endpoint.to_string()
    };

    Url::parse(&parseable).map_err(|e| {
        ConfigError::Validation(format!("`latex.endpoint` is not a valid URL: {e}"))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.site.dir, PathBuf::from("public"));
        assert!(config.code.enable);
        assert_eq!(config.code.prefix, "language-");
        assert_eq!(config.latex.endpoint, "//menteslibres.net/api/latex/png");
        assert_eq!(config.table.class, "table");
        assert_eq!(config.nav.active_class, "active");
    }

    #[test]
    fn test_partial_config_overrides() {
        let config = SiteConfig::from_str(
            "[table]\nclass = \"data\"\n\n[latex]\nenable = false\n",
        )
        .unwrap();
        assert_eq!(config.table.class, "data");
        assert!(!config.latex.enable);
        // Untouched sections keep defaults
        assert!(config.code.enable);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(SiteConfig::from_str("[table\nclass = \"x\"").is_err());
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let (_, ignored) =
            SiteConfig::parse_with_ignored("[table]\nclass = \"x\"\nstripes = true\n").unwrap();
        assert_eq!(ignored, ["table.stripes"]);
    }

    #[test]
    fn test_validate_rejects_whitespace_class() {
        let mut config = SiteConfig::default();
        config.nav.active_class = "is active".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_prefix() {
        let mut config = SiteConfig::default();
        config.code.prefix = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_endpoint_forms() {
        assert!(check_endpoint("https://latex.example.com/png").is_ok());
        assert!(check_endpoint("//menteslibres.net/api/latex/png").is_ok());
        assert!(check_endpoint("/api/latex/png").is_ok());
        assert!(check_endpoint("not a url").is_err());
    }

    #[test]
    fn test_site_dir_resolution() {
        let mut config = SiteConfig::default();
        config.root = PathBuf::from("/srv/site");
        assert_eq!(config.site_dir(None), PathBuf::from("/srv/site/public"));
        assert_eq!(
            config.site_dir(Some(Path::new("out"))),
            PathBuf::from("/srv/site/out")
        );
        assert_eq!(
            config.site_dir(Some(Path::new("/tmp/out"))),
            PathBuf::from("/tmp/out")
        );
    }
}
