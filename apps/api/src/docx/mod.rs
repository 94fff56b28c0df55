//! Structural conversion for the binary document builder: rendered markup
//! back into a flat, typed element stream, plus the theme-driven font
//! selection. Writing the container bytes is the builder collaborator's
//! job, not ours.

pub mod fonts;
pub mod models;
pub mod structural;

pub use fonts::{font_for_theme, DEFAULT_FONT};
pub use models::{ElementKind, StructuralElement};
pub use structural::to_structural_elements;
