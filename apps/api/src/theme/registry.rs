//! Runtime theme discovery and the customization entry point.
//!
//! Discovery scans a directory (non-recursive) for `theme-<name>.css`
//! files and builds an immutable descriptor snapshot. The snapshot is
//! swapped wholesale behind a single lock so readers holding the previous
//! `Arc` are never affected by a concurrent refresh.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::theme::color::is_hex_color;
use crate::theme::customize::{self, ACCENT_VAR, PRIMARY_VAR, SECONDARY_VAR};
use crate::theme::models::{ThemeCustomization, ThemeDescriptor};

const THEME_PREFIX: &str = "theme-";
const THEME_EXTENSION: &str = ".css";

pub struct ThemeRegistry {
    themes_dir: PathBuf,
    snapshot: RwLock<Arc<Vec<ThemeDescriptor>>>,
}

impl ThemeRegistry {
    pub fn new(themes_dir: impl Into<PathBuf>) -> Self {
        ThemeRegistry {
            themes_dir: themes_dir.into(),
            snapshot: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Scans the themes directory and swaps in a fresh descriptor set.
    /// Returns the number of themes discovered.
    pub async fn discover(&self) -> usize {
        let discovered = scan_directory(&self.themes_dir).await;
        let count = discovered.len();
        *self.snapshot.write() = Arc::new(discovered);
        count
    }

    /// Re-runs discovery. Readers of the previous snapshot are unaffected.
    pub async fn refresh(&self) -> usize {
        self.discover().await
    }

    /// Returns the current descriptor snapshot.
    pub fn themes(&self) -> Arc<Vec<ThemeDescriptor>> {
        Arc::clone(&self.snapshot.read())
    }

    /// Looks up a theme by name, listing the known names on failure.
    pub fn find(&self, name: &str) -> Result<ThemeDescriptor, AppError> {
        let themes = self.themes();
        themes
            .iter()
            .find(|t| t.name == name)
            .cloned()
            .ok_or_else(|| AppError::ThemeNotFound {
                name: name.to_string(),
                known: themes.iter().map(|t| t.name.clone()).collect(),
            })
    }

    /// Returns the theme's stylesheet, with overrides applied when the
    /// theme is customizable. Non-customizable themes always return the
    /// source untouched, whatever overrides were supplied.
    pub async fn style_source(
        &self,
        name: &str,
        customization: Option<&ThemeCustomization>,
    ) -> Result<String, AppError> {
        let theme = self.find(name)?;
        let css = tokio::fs::read_to_string(&theme.path)
            .await
            .with_context(|| format!("failed to read theme file {}", theme.path.display()))?;
        match customization {
            Some(custom) if theme.customizable && custom.has_overrides() => {
                Ok(customize::apply(&css, custom))
            }
            _ => Ok(css),
        }
    }
}

/// Scans `dir` for theme files. A missing or unreadable directory is not
/// an error: it logs a warning and yields an empty set.
async fn scan_directory(dir: &Path) -> Vec<ThemeDescriptor> {
    let mut read_dir = match tokio::fs::read_dir(dir).await {
        Ok(rd) => rd,
        Err(e) => {
            warn!("themes directory {} not readable: {e}", dir.display());
            return Vec::new();
        }
    };

    let mut themes = Vec::new();
    loop {
        match read_dir.next_entry().await {
            Ok(Some(entry)) => {
                let file_name = entry.file_name();
                let Some(name) = theme_name(&file_name.to_string_lossy()) else {
                    continue;
                };
                let path = entry.path();
                // An unreadable file degrades to a non-customizable theme.
                let descriptor = match tokio::fs::read_to_string(&path).await {
                    Ok(css) => parse_descriptor(&name, path, &css),
                    Err(e) => {
                        warn!("theme file {} not readable: {e}", path.display());
                        plain_descriptor(&name, path)
                    }
                };
                debug!(
                    "discovered theme '{}' (customizable: {})",
                    descriptor.name, descriptor.customizable
                );
                themes.push(descriptor);
            }
            Ok(None) => break,
            Err(e) => {
                warn!("error while scanning {}: {e}", dir.display());
                break;
            }
        }
    }
    themes.sort_by(|a, b| a.name.cmp(&b.name));
    themes
}

/// Extracts `<name>` from a `theme-<name>.css` filename.
fn theme_name(file_name: &str) -> Option<String> {
    let stem = file_name
        .strip_prefix(THEME_PREFIX)?
        .strip_suffix(THEME_EXTENSION)?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.to_string())
}

/// Builds a descriptor from the stylesheet text. A theme is customizable
/// iff it declares `--theme-primary`; color values that are not
/// well-formed `#rrggbb` are dropped rather than surfaced half-parsed.
fn parse_descriptor(name: &str, path: PathBuf, css: &str) -> ThemeDescriptor {
    let customizable = css.contains(&format!("{PRIMARY_VAR}:"));
    let color = |var: &str| {
        customize::extract_variable(css, var).filter(|v| is_hex_color(v))
    };
    ThemeDescriptor {
        display_name: display_name(name),
        name: name.to_string(),
        path,
        customizable,
        primary: if customizable { color(PRIMARY_VAR) } else { None },
        secondary: if customizable { color(SECONDARY_VAR) } else { None },
        accent: if customizable { color(ACCENT_VAR) } else { None },
    }
}

fn plain_descriptor(name: &str, path: PathBuf) -> ThemeDescriptor {
    ThemeDescriptor {
        display_name: display_name(name),
        name: name.to_string(),
        path,
        customizable: false,
        primary: None,
        secondary: None,
        accent: None,
    }
}

/// `"dark-modern"` -> `"Dark Modern"`.
fn display_name(name: &str) -> String {
    name.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
