//! HTTP surface: one page, its resume download, and a JSON view of the
//! resolved sections.
//!
//! Handlers are infallible by construction: locale selection falls back to
//! the default, content is pre-validated, and assets are pre-loaded. Every
//! request is a full top-to-bottom render pass over immutable shared state.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::assets::{AssetStore, RESUME_FILENAME, RESUME_MIME};
use crate::content::{Locale, ProfileCatalog};
use crate::html::HtmlPage;
use crate::render::{render_page, resolve_sections, RenderContext, Section};

/// Immutable shared state; cloned per request, contents never mutated.
#[derive(Clone)]
pub struct AppState {
    pub catalog: ProfileCatalog,
    pub assets: Arc<AssetStore>,
}

#[derive(Debug, Deserialize)]
pub struct LangQuery {
    /// Selector value: a display label ("English" / "Français") or an ISO
    /// code. Absent on first render.
    lang: Option<String>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/resume.pdf", get(resume_handler))
        .route("/api/sections", get(sections_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /?lang=<label>
/// Full render pass for the selected locale; unknown labels fall back to the
/// default locale rather than erroring.
async fn page_handler(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Html<String> {
    let locale = Locale::select(query.lang.as_deref());
    info!("Rendering page for locale '{}'", locale.code());

    let ctx = RenderContext {
        locale,
        content: state.catalog.get(locale),
        assets: &state.assets,
    };
    let mut page = HtmlPage::new(locale);
    render_page(&ctx, &mut page);
    Html(page.finish())
}

/// GET /resume.pdf
/// The resume bytes, verbatim, as a download. Same payload for every locale.
async fn resume_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, RESUME_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{RESUME_FILENAME}\""),
            ),
        ],
        state.assets.resume_pdf.clone(),
    )
}

/// GET /api/sections?lang=<label>
/// The resolved section list for the locale, as JSON.
async fn sections_handler(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Json<Vec<Section>> {
    let locale = Locale::select(query.lang.as_deref());
    let ctx = RenderContext {
        locale,
        content: state.catalog.get(locale),
        assets: &state.assets,
    };
    Json(resolve_sections(&ctx))
}

/// GET /health
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
    }))
}
