use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A discovered theme. Rebuilt wholesale on every discovery pass; never
/// mutated in place.
///
/// The color fields are populated only for customizable themes, and only
/// when the extracted value is a well-formed `#rrggbb` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    pub name: String,
    pub display_name: String,
    pub path: PathBuf,
    pub customizable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

/// Caller-supplied color overrides, applied per render. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeCustomization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl ThemeCustomization {
    pub fn has_overrides(&self) -> bool {
        self.primary.is_some() || self.secondary.is_some() || self.accent.is_some()
    }
}
