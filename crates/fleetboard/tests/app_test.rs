// End-to-end router tests against a canned query backend.
//
// Each test builds the real router with `StubBackend` supplying fixed
// responses per call, then drives it with `tower::ServiceExt::oneshot`
// and asserts on the rendered HTML.

use std::collections::HashMap;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use fleetboard::{build_router, AppState, ViewSettings};
use fleetboard_core::model::metric::{
    population_path, AVG_RESOURCES_PER_NODE, NUM_NODES, NUM_RESOURCES,
};
use fleetboard_core::{CoreError, EnvScope, Environment, Metric, Node, QueryBackend};

// ── Stub backend ────────────────────────────────────────────────────

#[derive(Default)]
struct StubBackend {
    environments: Vec<Environment>,
    nodes: Vec<Node>,
    node_count: i64,
    resource_count: i64,
    metrics: HashMap<String, Metric>,
    fail_environments: bool,
}

impl StubBackend {
    fn with_default_environments() -> Self {
        Self {
            environments: vec![Environment::new("production"), Environment::new("staging")],
            ..Self::default()
        }
    }
}

impl QueryBackend for StubBackend {
    async fn environments(&self) -> Result<Vec<Environment>, CoreError> {
        if self.fail_environments {
            return Err(CoreError::Upstream {
                message: "connection reset".into(),
                status: None,
            });
        }
        Ok(self.environments.clone())
    }

    async fn nodes(&self, _scope: &EnvScope) -> Result<Vec<Node>, CoreError> {
        Ok(self.nodes.clone())
    }

    async fn node_count(&self, _scope: &EnvScope) -> Result<i64, CoreError> {
        Ok(self.node_count)
    }

    async fn resource_count(&self, _scope: &EnvScope) -> Result<i64, CoreError> {
        Ok(self.resource_count)
    }

    async fn metric(&self, path: &str) -> Result<Metric, CoreError> {
        self.metrics
            .get(path)
            .cloned()
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "metric".into(),
                identifier: path.to_owned(),
            })
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

fn default_node() -> Node {
    Node {
        name: "node".into(),
        report_timestamp: Some(Utc::now() - Duration::minutes(10)),
        catalog_timestamp: Some(Utc::now() - Duration::minutes(10)),
        facts_timestamp: Some(Utc::now() - Duration::minutes(10)),
        latest_report_hash: Some("1234567".into()),
        latest_report_status: Some("changed".into()),
        latest_report_noop: false,
        environment: Some("production".into()),
    }
}

async fn get(backend: StubBackend, settings: ViewSettings, uri: &str) -> (StatusCode, String) {
    let router = build_router(AppState::new(backend, settings));
    let response = router
        .oneshot(
            Request::get(uri)
                .body(Body::empty())
                .expect("request build"),
        )
        .await
        .expect("router response");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collect")
        .to_bytes();
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

fn title_of(body: &str) -> &str {
    let start = body.find("<title>").expect("page has a title") + "<title>".len();
    let end = body[start..].find("</title>").expect("title closed") + start;
    &body[start..end]
}

/// Contents of every `<h1 class="headline">` element, in document order.
fn headlines_of(body: &str) -> Vec<&str> {
    let marker = "<h1 class=\"headline\">";
    let mut out = Vec::new();
    let mut rest = body;
    while let Some(pos) = rest.find(marker) {
        let after = &rest[pos + marker.len()..];
        let end = after.find("</h1>").expect("headline closed");
        out.push(&after[..end]);
        rest = &after[end..];
    }
    out
}

/// Values of every `href="..."` and `src="..."` attribute in the body.
fn asset_refs(body: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for marker in ["href=\"", "src=\""] {
        let mut rest = body;
        while let Some(pos) = rest.find(marker) {
            let after = &rest[pos + marker.len()..];
            let end = after.find('"').expect("attribute closed");
            out.push(&after[..end]);
            rest = &after[end..];
        }
    }
    out
}

fn count_occurrences(body: &str, needle: &str) -> usize {
    body.matches(needle).count()
}

// ── Environment resolution ──────────────────────────────────────────

#[tokio::test]
async fn unknown_environment_is_404() {
    let (status, body) = get(
        StubBackend::with_default_environments(),
        ViewSettings::default(),
        "/nonexsistenv/",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(title_of(&body), "Fleetboard");
    assert!(body.contains("<h1>Not Found</h1>"));
}

#[tokio::test]
async fn unknown_environment_on_nodes_is_404() {
    let (status, body) = get(
        StubBackend::with_default_environments(),
        ViewSettings::default(),
        "/nonexsistenv/nodes",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(title_of(&body), "Fleetboard");
    assert!(body.contains("<h1>Not Found</h1>"));
}

#[tokio::test]
async fn unknown_route_is_404_with_standard_title() {
    let (status, body) = get(
        StubBackend::with_default_environments(),
        ViewSettings::default(),
        "/definitely/not/a/route",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(title_of(&body), "Fleetboard");
    assert!(body.contains("<h1>Not Found</h1>"));
}

// ── Index view ──────────────────────────────────────────────────────

#[tokio::test]
async fn index_renders_for_default_environment() {
    let backend = StubBackend {
        nodes: vec![default_node()],
        node_count: 10,
        resource_count: 40,
        ..StubBackend::with_default_environments()
    };

    let (status, body) = get(backend, ViewSettings::default(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(title_of(&body), "Fleetboard");
    // 10 nodes, 40 resources, 4.0 average (fixed-width like all
    // fractional figures).
    assert_eq!(headlines_of(&body), vec!["10", "40", "         4"]);
}

#[tokio::test]
async fn index_all_renders_three_population_metrics_in_order() {
    let metrics = HashMap::from([
        (population_path(NUM_NODES), Metric::Text("50".into())),
        (population_path(NUM_RESOURCES), Metric::Text("60".into())),
        (population_path(AVG_RESOURCES_PER_NODE), Metric::Float(60.3)),
    ]);
    let backend = StubBackend {
        metrics,
        ..StubBackend::with_default_environments()
    };

    let (status, body) = get(backend, ViewSettings::default(), "/%2A/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(title_of(&body), "Fleetboard");
    // The fractional metric keeps its fixed-width rendering.
    assert_eq!(headlines_of(&body), vec!["50", "60", "        60"]);
}

// ── Offline mode ────────────────────────────────────────────────────

#[tokio::test]
async fn offline_mode_emits_only_same_origin_asset_references() {
    let backend = StubBackend {
        node_count: 10,
        resource_count: 40,
        ..StubBackend::with_default_environments()
    };
    let settings = ViewSettings {
        offline_mode: true,
        ..ViewSettings::default()
    };

    let (status, body) = get(backend, settings, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(title_of(&body), "Fleetboard");
    for reference in asset_refs(&body) {
        assert!(
            !reference.contains("//"),
            "cross-origin reference in offline mode: {reference}"
        );
    }
}

#[tokio::test]
async fn online_mode_uses_cdn_stylesheet() {
    let backend = StubBackend {
        node_count: 10,
        resource_count: 40,
        ..StubBackend::with_default_environments()
    };

    let (_, body) = get(backend, ViewSettings::default(), "/").await;

    assert!(asset_refs(&body).iter().any(|r| r.starts_with("https://")));
}

// ── Node list view ──────────────────────────────────────────────────

#[tokio::test]
async fn node_view_renders_one_badge_per_status() {
    let backend = StubBackend {
        nodes: vec![default_node()],
        ..StubBackend::with_default_environments()
    };

    let (status, body) = get(backend, ViewSettings::default(), "/nodes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(title_of(&body), "Fleetboard");
    for label in ["failed", "changed", "unreported", "noop"] {
        assert_eq!(
            count_occurrences(&body, &format!("class=\"status-badge {label}\"")),
            1,
            "expected exactly one {label} badge"
        );
        assert_eq!(
            count_occurrences(&body, &format!("node-{label}")),
            1,
            "expected one link target for {label}"
        );
    }
}

#[tokio::test]
async fn node_view_status_filter_limits_rows() {
    let mut failed = default_node();
    failed.name = "broken.example.com".into();
    failed.latest_report_status = Some("failed".into());
    let backend = StubBackend {
        nodes: vec![default_node(), failed],
        ..StubBackend::with_default_environments()
    };

    let (status, body) = get(
        backend,
        ViewSettings::default(),
        "/production/nodes?status=node-failed",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("broken.example.com"));
    assert_eq!(count_occurrences(&body, "class=\"node-name\""), 1);
    // Badges still cover the whole scope.
    assert_eq!(count_occurrences(&body, "class=\"status-badge failed\""), 1);
}

// ── Radiator view ───────────────────────────────────────────────────

#[tokio::test]
async fn radiator_shows_total_node_count() {
    let backend = StubBackend {
        nodes: vec![default_node()],
        node_count: 10,
        resource_count: 40,
        ..StubBackend::with_default_environments()
    };

    let (status, body) = get(backend, ViewSettings::default(), "/radiator").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(title_of(&body), "Fleetboard");
    assert!(body.contains("<div class=\"total\">10</div>"));
}

#[tokio::test]
async fn radiator_unknown_environment_is_404() {
    let (status, body) = get(
        StubBackend::with_default_environments(),
        ViewSettings::default(),
        "/nothere/radiator",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(title_of(&body), "Fleetboard");
    assert!(body.contains("<h1>Not Found</h1>"));
}

#[tokio::test]
async fn radiator_zero_nodes_does_not_divide() {
    let backend = StubBackend {
        node_count: 0,
        resource_count: 40,
        ..StubBackend::with_default_environments()
    };

    let (status, body) = get(backend, ViewSettings::default(), "/radiator").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(title_of(&body), "Fleetboard");
    assert!(body.contains("<div class=\"total\">0</div>"));
    assert!(body.contains("0.0"));
}

#[tokio::test]
async fn radiator_has_no_external_asset_references() {
    let backend = StubBackend {
        node_count: 10,
        resource_count: 40,
        ..StubBackend::with_default_environments()
    };

    let (_, body) = get(backend, ViewSettings::default(), "/radiator").await;

    assert!(asset_refs(&body).is_empty());
    assert!(!body.contains("<link"));
    assert!(!body.contains("<script"));
}

// ── Upstream failure ────────────────────────────────────────────────

#[tokio::test]
async fn backend_failure_degrades_to_error_page() {
    let backend = StubBackend {
        fail_environments: true,
        ..StubBackend::default()
    };

    let (status, body) = get(backend, ViewSettings::default(), "/").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(title_of(&body), "Fleetboard");
    assert!(body.contains("<h1>Upstream Error</h1>"));
}

// ── Static assets ───────────────────────────────────────────────────

#[tokio::test]
async fn embedded_assets_are_served() {
    let (status, body) = get(
        StubBackend::with_default_environments(),
        ViewSettings::default(),
        "/static/css/fleetboard.css",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(".status-badge"));
}
