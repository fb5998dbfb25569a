// ── View aggregates ──
//
// Counts, ratios, and percentages derived from query results. Every
// division guards against a zero denominator: an empty fleet renders
// zeros, it never faults.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::model::{Node, NodeStatus};

/// Average resources per node; 0 when the fleet is empty.
#[allow(clippy::cast_precision_loss)]
pub fn average_per_node(resources: i64, nodes: i64) -> f64 {
    if nodes == 0 {
        0.0
    } else {
        resources as f64 / nodes as f64
    }
}

/// Percentage of `part` in `total`; 0 when `total` is 0.
#[allow(clippy::cast_precision_loss)]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Per-status node tally for badges and radiator percentages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusCounts {
    counts: HashMap<NodeStatus, usize>,
    total: usize,
}

impl StatusCounts {
    /// Tally the derived status of each node at `now`.
    pub fn tally(nodes: &[Node], now: DateTime<Utc>, unreported_after: Duration) -> Self {
        let mut counts: HashMap<NodeStatus, usize> = HashMap::new();
        for node in nodes {
            *counts.entry(node.status_at(now, unreported_after)).or_default() += 1;
        }
        Self {
            counts,
            total: nodes.len(),
        }
    }

    pub fn count(&self, status: NodeStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Share of the fleet in `status`, zero-guarded.
    pub fn percent(&self, status: NodeStatus) -> f64 {
        percentage(self.count(status), self.total)
    }
}
