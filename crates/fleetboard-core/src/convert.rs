// ── API → core model translation ──
//
// Wire records carry optional everything; the core model pins down the
// fields the views actually consume.

use fleetboard_api::models::{EnvironmentRef, MetricValue, NodeRecord};

use crate::model::{Environment, Metric, Node};

impl From<EnvironmentRef> for Environment {
    fn from(e: EnvironmentRef) -> Self {
        Environment { name: e.name }
    }
}

impl From<NodeRecord> for Node {
    fn from(r: NodeRecord) -> Self {
        Node {
            name: r.name,
            report_timestamp: r.report_timestamp,
            catalog_timestamp: r.catalog_timestamp,
            facts_timestamp: r.facts_timestamp,
            latest_report_hash: r.latest_report_hash,
            latest_report_status: r.latest_report_status,
            latest_report_noop: r.latest_report_noop.unwrap_or(false),
            environment: r.environment,
        }
    }
}

impl From<MetricValue> for Metric {
    fn from(v: MetricValue) -> Self {
        match v {
            MetricValue::Int(i) => Metric::Int(i),
            MetricValue::Float(f) => Metric::Float(f),
            MetricValue::Text(s) => Metric::Text(s),
        }
    }
}
