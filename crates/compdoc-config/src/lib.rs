//! Render configuration for compdoc.
//!
//! [`RenderOptions`] holds what the caller supplied, with every field optional.
//! Options are either built in code or parsed from TOML:
//!
//! ```toml
//! level = 2
//! print_order = ["props", "events"]
//! ignore_description = true
//!
//! [titles]
//! props = "Properties"
//! ```
//!
//! Before a render the options are merged with the built-in defaults into an
//! immutable [`ResolvedOptions`]. The caller's value is never mutated.

mod category;

pub use category::Category;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Starting heading depth when none is configured.
pub const DEFAULT_LEVEL: u8 = 1;

/// Deepest heading Markdown supports.
pub const MAX_LEVEL: u8 = 6;

/// Category order used when none is configured.
pub const DEFAULT_PRINT_ORDER: [Category; 4] = [
    Category::Props,
    Category::Slots,
    Category::Events,
    Category::Methods,
];

/// Caller-supplied render options.
///
/// Field names accept both `snake_case` and the camelCase spelling
/// (`printOrder`, `ignoreName`, `ignoreDescription`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderOptions {
    /// Starting heading depth. `None` and `0` both mean [`DEFAULT_LEVEL`].
    pub level: Option<u8>,
    /// Section title overrides, keyed by category key.
    pub titles: HashMap<String, String>,
    /// Category keys in render order.
    ///
    /// Kept as raw strings: unknown keys are reported by the renderer when it
    /// reaches them.
    #[serde(alias = "printOrder")]
    pub print_order: Option<Vec<String>>,
    /// Suppress the top-level name heading.
    #[serde(alias = "ignoreName")]
    pub ignore_name: bool,
    /// Suppress the top-level description paragraph.
    #[serde(alias = "ignoreDescription")]
    pub ignore_description: bool,
}

impl RenderOptions {
    /// Create empty options (all defaults).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting heading depth.
    #[must_use]
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    /// Override the section title of one category.
    #[must_use]
    pub fn with_title(mut self, category: Category, title: impl Into<String>) -> Self {
        self.titles.insert(category.key().to_owned(), title.into());
        self
    }

    /// Set the category keys to render, in order.
    #[must_use]
    pub fn with_print_order<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.print_order = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Skip the top-level name heading.
    #[must_use]
    pub fn with_ignore_name(mut self) -> Self {
        self.ignore_name = true;
        self
    }

    /// Skip the top-level description paragraph.
    #[must_use]
    pub fn with_ignore_description(mut self) -> Self {
        self.ignore_description = true;
        self
    }

    /// Parse options from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed TOML and
    /// `ConfigError::Validation` on out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let options: Self = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if `path` does not exist, otherwise
    /// the errors of [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate option values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `level` exceeds [`MAX_LEVEL`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = self.level
            && level > MAX_LEVEL
        {
            return Err(ConfigError::Validation(format!(
                "level must be at most {MAX_LEVEL}, got {level}"
            )));
        }
        Ok(())
    }

    /// Merge with the built-in defaults.
    #[must_use]
    pub fn resolve(&self) -> ResolvedOptions {
        let level = self
            .level
            .filter(|level| *level != 0)
            .unwrap_or(DEFAULT_LEVEL);
        let print_order = self.print_order.clone().unwrap_or_else(|| {
            DEFAULT_PRINT_ORDER
                .iter()
                .map(|category| category.key().to_owned())
                .collect()
        });

        ResolvedOptions {
            level,
            titles: self.titles.clone(),
            print_order,
            ignore_name: self.ignore_name,
            ignore_description: self.ignore_description,
        }
    }
}

/// Fully resolved, read-only render options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedOptions {
    level: u8,
    titles: HashMap<String, String>,
    print_order: Vec<String>,
    ignore_name: bool,
    ignore_description: bool,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        RenderOptions::default().resolve()
    }
}

impl ResolvedOptions {
    /// Starting heading depth.
    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Category keys in render order.
    #[must_use]
    pub fn print_order(&self) -> &[String] {
        &self.print_order
    }

    /// Whether the name heading is suppressed.
    #[must_use]
    pub fn ignore_name(&self) -> bool {
        self.ignore_name
    }

    /// Whether the description paragraph is suppressed.
    #[must_use]
    pub fn ignore_description(&self) -> bool {
        self.ignore_description
    }

    /// Section title for `category`.
    ///
    /// Falls back to the built-in title when no override is set or the
    /// override is empty.
    #[must_use]
    pub fn title(&self, category: Category) -> &str {
        self.titles
            .get(category.key())
            .map(String::as_str)
            .filter(|title| !title.is_empty())
            .unwrap_or(category.default_title())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}
