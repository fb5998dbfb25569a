// ── Node list view ──
//
// Full node table with per-status badges. Every status in
// `NodeStatus::BADGES` always renders exactly one badge, even when no
// node currently carries it; the `?status=node-<status>` query filters
// the table rows only.

use axum::extract::{Path, Query, State};
use axum::response::Html;
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use fleetboard_core::aggregate::StatusCounts;
use fleetboard_core::{EnvScope, NodeStatus, QueryBackend};

use crate::assets::AssetLinks;
use crate::error::ViewError;
use crate::state::AppState;
use crate::templates::{Badge, NodeRow, NodesTemplate};
use crate::views::{render_page, request_scope};

#[derive(Debug, Default, Deserialize)]
pub struct NodesQuery {
    /// Status filter token, e.g. `node-failed`.
    pub status: Option<String>,
}

/// `GET /nodes` — node list for the configured default environment.
pub async fn default<B: QueryBackend>(
    State(state): State<AppState<B>>,
    Query(query): Query<NodesQuery>,
) -> Result<Html<String>, ViewError> {
    let default_env = state.settings.default_environment.clone();
    let scope = request_scope(&state, &default_env).await?;
    render(&state, &scope, &query).await
}

/// `GET /:env/nodes`
pub async fn scoped<B: QueryBackend>(
    State(state): State<AppState<B>>,
    Path(env): Path<String>,
    Query(query): Query<NodesQuery>,
) -> Result<Html<String>, ViewError> {
    let scope = request_scope(&state, &env).await?;
    render(&state, &scope, &query).await
}

async fn render<B: QueryBackend>(
    state: &AppState<B>,
    scope: &EnvScope,
    query: &NodesQuery,
) -> Result<Html<String>, ViewError> {
    debug!(scope = %scope, filter = ?query.status, "rendering node list");

    let nodes = state.backend.nodes(scope).await?;
    let now = Utc::now();
    let unreported_after = state.settings.unreported_after();

    // Badges tally the whole scope, not the filtered rows.
    let counts = StatusCounts::tally(&nodes, now, unreported_after);
    let badges = NodeStatus::BADGES
        .iter()
        .map(|status| Badge {
            status: status.as_str(),
            count: counts.count(*status),
            href: format!("/{}/nodes?status=node-{status}", scope.segment()),
        })
        .collect();

    let filter = query.status.as_deref().and_then(NodeStatus::from_filter_token);
    let rows = nodes
        .iter()
        .map(|node| (node, node.status_at(now, unreported_after)))
        .filter(|(_, status)| filter.is_none_or(|wanted| *status == wanted))
        .map(|(node, status)| NodeRow {
            name: node.name.clone(),
            status: status.as_str(),
            reported: node
                .report_timestamp
                .map_or_else(|| "never".into(), |t| t.format("%Y-%m-%d %H:%M:%S").to_string()),
        })
        .collect();

    let page = NodesTemplate {
        scope_label: scope.to_string(),
        badges,
        rows,
        assets: AssetLinks::for_mode(state.settings.offline_mode),
    };
    render_page(&page)
}
