// Inventory query service response types
//
// Every query method has its own typed response — there is no shared
// envelope. Fields use `#[serde(default)]` liberally because the service
// omits fields that have never been populated for a node.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Environments ─────────────────────────────────────────────────────

/// One entry from `GET /v4/environments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentRef {
    pub name: String,
}

// ── Nodes ────────────────────────────────────────────────────────────

/// A node record from `GET /v4/nodes` (or the environment-scoped variant).
///
/// Timestamps are `None` for nodes that have never reported, submitted a
/// catalog, or pushed facts. The service adds fields across versions, so
/// everything unmodeled lands in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub name: String,
    #[serde(default)]
    pub report_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub catalog_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub facts_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub latest_report_hash: Option<String>,
    /// Outcome of the latest report: "failed", "changed", or "unchanged".
    #[serde(default)]
    pub latest_report_status: Option<String>,
    #[serde(default)]
    pub latest_report_noop: Option<bool>,
    #[serde(default)]
    pub environment: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Counts ───────────────────────────────────────────────────────────

/// Response from the `node-count` and `resource-count` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountRow {
    pub count: i64,
}

// ── Metrics ──────────────────────────────────────────────────────────

/// Response from `GET /metrics/v1/mbeans/{path}`.
///
/// The JVM-style metrics endpoint wraps the figure in a `Value` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MbeanValue {
    #[serde(rename = "Value")]
    pub value: MetricValue,
}

/// A metric figure as reported upstream.
///
/// The metrics endpoint is inconsistent about numeric representation:
/// gauges come back as JSON strings, counters as integers, and derived
/// averages as floats. Callers decide how to render each form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Int(i64),
    Float(f64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_value_deserializes_all_forms() {
        let v: MetricValue = serde_json::from_str("\"50\"").expect("string form");
        assert_eq!(v, MetricValue::Text("50".into()));

        let v: MetricValue = serde_json::from_str("60").expect("integer form");
        assert_eq!(v, MetricValue::Int(60));

        let v: MetricValue = serde_json::from_str("60.3").expect("float form");
        assert_eq!(v, MetricValue::Float(60.3));
    }

    #[test]
    fn node_record_tolerates_sparse_fields() {
        let raw = r#"{"name": "fresh-node", "some_new_field": 1}"#;
        let node: NodeRecord = serde_json::from_str(raw).expect("sparse node");
        assert_eq!(node.name, "fresh-node");
        assert!(node.report_timestamp.is_none());
        assert!(node.latest_report_status.is_none());
        assert!(node.extra.contains_key("some_new_field"));
    }
}
