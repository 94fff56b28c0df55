//! Render handlers: markdown in, themed output out. The HTML path is the
//! full pipeline; the docx path returns the structural element stream and
//! font selection the binary document builder consumes.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::content;
use crate::docx::{self, StructuralElement};
use crate::errors::AppError;
use crate::render;
use crate::state::AppState;
use crate::theme::ThemeCustomization;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub markdown: String,
    pub theme: String,
    #[serde(default)]
    pub customization: Option<ThemeCustomization>,
}

#[derive(Debug, Serialize)]
pub struct DocxResponse {
    pub font_family: String,
    pub elements: Vec<StructuralElement>,
}

/// POST /api/v1/render/html
/// Parses the markdown and returns a themed HTML document.
pub async fn render_html(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Response, AppError> {
    let parsed = content::parse(&request.markdown);
    let css = state
        .themes
        .style_source(&request.theme, request.customization.as_ref())
        .await?;
    let html = render::render_document(&parsed, &css);
    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
        .into_response())
}

/// POST /api/v1/render/docx
/// Runs the full pipeline and returns the flat element stream plus the
/// font family for the document builder.
pub async fn render_docx(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Json<DocxResponse>, AppError> {
    let mut parsed = content::parse(&request.markdown);
    let css = state
        .themes
        .style_source(&request.theme, request.customization.as_ref())
        .await?;
    parsed.markup = render::render_document(&parsed, &css);
    let elements = docx::to_structural_elements(&parsed.markup, &parsed.metadata);
    Ok(Json(DocxResponse {
        font_family: docx::font_for_theme(&request.theme).to_string(),
        elements,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::Config;
    use crate::docx::ElementKind;
    use crate::theme::ThemeRegistry;

    async fn state_with_theme(css: &str) -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("theme-modern.css"), css).unwrap();
        let themes = Arc::new(ThemeRegistry::new(dir.path()));
        themes.discover().await;
        let state = AppState {
            config: Config {
                themes_dir: dir.path().display().to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
            themes,
        };
        (dir, state)
    }

    #[tokio::test]
    async fn test_render_docx_end_to_end() {
        let (_dir, state) = state_with_theme(":root { --theme-primary: #2563eb; }").await;
        let request = RenderRequest {
            markdown: "---\nname: Ada\nemail: ada@example.com\n---\n## Skills\n\n- Rust".to_string(),
            theme: "modern".to_string(),
            customization: None,
        };
        let Json(response) = render_docx(State(state), Json(request)).await.unwrap();
        assert_eq!(response.font_family, "Inter");
        let kinds: Vec<ElementKind> = response.elements.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::HeadingLevel1,
                ElementKind::Paragraph,
                ElementKind::HeadingLevel2,
                ElementKind::ListItem,
            ]
        );
        assert_eq!(response.elements[0].text, "Ada");
        assert_eq!(response.elements[3].text, "Rust");
    }

    #[tokio::test]
    async fn test_render_html_applies_customized_stylesheet() {
        let (_dir, state) =
            state_with_theme(":root { --theme-primary: #2563eb; }\nh1 { color: var(--theme-primary); }").await;
        let request = RenderRequest {
            markdown: "# Hello".to_string(),
            theme: "modern".to_string(),
            customization: Some(ThemeCustomization {
                primary: Some("#808080".to_string()),
                ..Default::default()
            }),
        };
        let response = render_html(State(state), Json(request)).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("--theme-primary: #808080;"));
        assert!(html.contains("<h1>Hello</h1>"));
    }

    #[tokio::test]
    async fn test_render_unknown_theme_is_not_found() {
        let (_dir, state) = state_with_theme("body { margin: 0; }").await;
        let request = RenderRequest {
            markdown: "hi".to_string(),
            theme: "nope".to_string(),
            customization: None,
        };
        let err = render_html(State(state), Json(request)).await.unwrap_err();
        assert!(matches!(err, AppError::ThemeNotFound { .. }));
    }
}
