//! Theme engine: runtime discovery of CSS-variable themes, color-variant
//! derivation, and per-render customization.

pub mod color;
pub mod customize;
pub mod models;
pub mod registry;

pub use models::{ThemeCustomization, ThemeDescriptor};
pub use registry::ThemeRegistry;
