// Markup rendering for parsed resume content. The page renderer (HTML to
// paginated PDF via a headless browser) is an external collaborator and is
// not implemented here; this module produces the markup it consumes.

pub mod html;

pub use html::render_document;
