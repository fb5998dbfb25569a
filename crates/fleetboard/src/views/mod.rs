// Route handlers, one module per view.

pub mod index;
pub mod nodes;
pub mod radiator;
pub mod statics;

use askama::Template;
use axum::response::Html;

use fleetboard_core::{resolve_scope, EnvScope, QueryBackend};

use crate::error::ViewError;
use crate::state::AppState;

/// Resolve a requested environment segment for this request.
///
/// Fetches the current environment list from the backend (request-scoped,
/// never cached globally) and validates the segment against it. Unknown
/// names surface as `ViewError::NotFound`.
pub(crate) async fn request_scope<B: QueryBackend>(
    state: &AppState<B>,
    segment: &str,
) -> Result<EnvScope, ViewError> {
    let known = state.backend.environments().await?;
    Ok(resolve_scope(&known, segment)?)
}

/// Render a template into a response body.
pub(crate) fn render_page<T: Template>(page: &T) -> Result<Html<String>, ViewError> {
    Ok(Html(page.render()?))
}

/// Fallback handler: unknown route → rendered 404 page.
pub(crate) async fn not_found() -> ViewError {
    ViewError::NotFound
}
