//! Theme name to document font family. The builder collaborator takes a
//! single family name; sizing and spacing per element kind are its own
//! fixed policy.

/// Shipped theme set. Unknown names fall back to [`DEFAULT_FONT`].
const FONT_TABLE: &[(&str, &str)] = &[
    ("modern", "Inter"),
    ("classic", "Georgia"),
    ("minimal", "Helvetica Neue"),
    ("elegant", "EB Garamond"),
];

pub const DEFAULT_FONT: &str = "Arial";

pub fn font_for_theme(theme: &str) -> &'static str {
    FONT_TABLE
        .iter()
        .find(|(name, _)| *name == theme)
        .map(|(_, font)| *font)
        .unwrap_or(DEFAULT_FONT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_themes_map_to_their_families() {
        assert_eq!(font_for_theme("modern"), "Inter");
        assert_eq!(font_for_theme("classic"), "Georgia");
        assert_eq!(font_for_theme("minimal"), "Helvetica Neue");
        assert_eq!(font_for_theme("elegant"), "EB Garamond");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        assert_eq!(font_for_theme("vaporwave"), DEFAULT_FONT);
        assert_eq!(font_for_theme(""), DEFAULT_FONT);
    }
}
