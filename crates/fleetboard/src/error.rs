// ── View errors ──
//
// The error-to-page mapping for every handler: unknown environment or
// route renders the Not Found page (404), upstream failures degrade to
// an error page (502). Handlers never panic on upstream data.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

use fleetboard_core::CoreError;

use crate::assets::AssetLinks;
use crate::templates::{ErrorTemplate, NotFoundTemplate};

#[derive(Debug, Error)]
pub enum ViewError {
    /// Unknown environment or route.
    #[error("not found")]
    NotFound,

    /// The query backend failed or returned an unexpected shape.
    #[error("upstream error: {0}")]
    Upstream(CoreError),

    /// A template failed to render.
    #[error("render error: {0}")]
    Render(#[from] askama::Error),
}

impl From<CoreError> for ViewError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EnvironmentNotFound { .. } | CoreError::NotFound { .. } => Self::NotFound,
            other => Self::Upstream(other),
        }
    }
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => {
                let page = NotFoundTemplate {
                    // Error pages always use local assets so they render
                    // without network access.
                    assets: AssetLinks::local(),
                };
                error_page(StatusCode::NOT_FOUND, &page)
            }
            Self::Upstream(err) => {
                warn!(error = %err, "query backend failure, degrading to error page");
                let page = ErrorTemplate {
                    message: err.to_string(),
                    assets: AssetLinks::local(),
                };
                error_page(StatusCode::BAD_GATEWAY, &page)
            }
            Self::Render(err) => {
                warn!(error = %err, "template render failure");
                let page = ErrorTemplate {
                    message: "page rendering failed".into(),
                    assets: AssetLinks::local(),
                };
                error_page(StatusCode::INTERNAL_SERVER_ERROR, &page)
            }
        }
    }
}

/// Render an error template, falling back to a bare page that still
/// carries the application title if rendering itself fails.
fn error_page<T: Template>(status: StatusCode, page: &T) -> Response {
    match page.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            warn!(error = %err, "error page render failure, using fallback");
            let body = format!(
                "<!DOCTYPE html><html><head><title>{}</title></head>\
                 <body><h1>Error</h1></body></html>",
                crate::APP_NAME
            );
            (status, Html(body)).into_response()
        }
    }
}
