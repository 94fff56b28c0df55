//! Textual CSS-variable rewriting for theme customization.
//!
//! Extraction and replacement share one anchor token (`--theme-<x>:`) so a
//! value the registry reported as customizable is always the value a
//! customization overwrites. Replacement is first-match textual splicing,
//! not a CSS reparse; `var(--theme-x)` usages never match because the
//! anchor includes the colon.

use crate::theme::color;
use crate::theme::models::ThemeCustomization;

pub const PRIMARY_VAR: &str = "--theme-primary";
pub const PRIMARY_DARK_VAR: &str = "--theme-primary-dark";
pub const PRIMARY_LIGHT_VAR: &str = "--theme-primary-light";
pub const SECONDARY_VAR: &str = "--theme-secondary";
pub const ACCENT_VAR: &str = "--theme-accent";

/// Fixed derivation strength for the primary-dark / primary-light variants.
pub const SHADE_PERCENT: f32 = 20.0;

/// Returns the declared value of a `--theme-*` variable: the text between
/// the first `<var>:` and the next `;`, trimmed.
pub fn extract_variable(css: &str, var: &str) -> Option<String> {
    let token = format!("{var}:");
    let start = css.find(&token)? + token.len();
    let rest = &css[start..];
    let end = rest.find(';')?;
    Some(rest[..end].trim().to_string())
}

/// Replaces the value of the first `<var>:` declaration with `value`.
/// Returns the css unchanged when the variable is not declared.
pub fn replace_variable(css: &str, var: &str, value: &str) -> String {
    let token = format!("{var}:");
    let Some(pos) = css.find(&token) else {
        return css.to_string();
    };
    let value_start = pos + token.len();
    let Some(rel_end) = css[value_start..].find(';') else {
        return css.to_string();
    };
    let mut out = String::with_capacity(css.len() + value.len());
    out.push_str(&css[..value_start]);
    out.push(' ');
    out.push_str(value);
    out.push_str(&css[value_start + rel_end..]);
    out
}

/// Applies the supplied overrides to `css`.
///
/// Overriding the primary color also rewrites the two derived variants
/// (darkened and lightened by [`SHADE_PERCENT`]) when the sheet declares
/// them. Overrides that are not well-formed colors are skipped.
pub fn apply(css: &str, custom: &ThemeCustomization) -> String {
    let mut out = css.to_string();
    if let Some(primary) = valid(&custom.primary) {
        out = replace_variable(&out, PRIMARY_VAR, primary);
        if let Some(dark) = color::darken(primary, SHADE_PERCENT) {
            out = replace_variable(&out, PRIMARY_DARK_VAR, &dark);
        }
        if let Some(light) = color::lighten(primary, SHADE_PERCENT) {
            out = replace_variable(&out, PRIMARY_LIGHT_VAR, &light);
        }
    }
    if let Some(secondary) = valid(&custom.secondary) {
        out = replace_variable(&out, SECONDARY_VAR, secondary);
    }
    if let Some(accent) = valid(&custom.accent) {
        out = replace_variable(&out, ACCENT_VAR, accent);
    }
    out
}

fn valid(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| color::is_hex_color(v))
}
