use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// A managed node tracked by the inventory service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub report_timestamp: Option<DateTime<Utc>>,
    pub catalog_timestamp: Option<DateTime<Utc>>,
    pub facts_timestamp: Option<DateTime<Utc>>,
    pub latest_report_hash: Option<String>,
    /// Outcome of the latest report as reported upstream.
    pub latest_report_status: Option<String>,
    /// Whether the latest report ran in no-op mode.
    pub latest_report_noop: bool,
    pub environment: Option<String>,
}

/// Derived node status used for labeling in list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Failed,
    Changed,
    Unreported,
    Noop,
    Unchanged,
}

impl NodeStatus {
    /// The four statuses that get a badge in the node list view.
    pub const BADGES: [NodeStatus; 4] = [
        NodeStatus::Failed,
        NodeStatus::Changed,
        NodeStatus::Unreported,
        NodeStatus::Noop,
    ];

    /// CSS class / filter token, e.g. `failed`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Failed => "failed",
            Self::Changed => "changed",
            Self::Unreported => "unreported",
            Self::Noop => "noop",
            Self::Unchanged => "unchanged",
        }
    }

    /// Parse a `node-<status>` filter token from a query string.
    pub fn from_filter_token(token: &str) -> Option<Self> {
        match token {
            "node-failed" => Some(Self::Failed),
            "node-changed" => Some(Self::Changed),
            "node-unreported" => Some(Self::Unreported),
            "node-noop" => Some(Self::Noop),
            "node-unchanged" => Some(Self::Unchanged),
            _ => None,
        }
    }
}

impl Node {
    /// Derive the display status at `now`.
    ///
    /// A node with no report, or whose last report is older than
    /// `unreported_after`, is unreported regardless of what that report
    /// said. Otherwise the no-op flag wins over the report outcome.
    pub fn status_at(&self, now: DateTime<Utc>, unreported_after: Duration) -> NodeStatus {
        let Some(reported) = self.report_timestamp else {
            return NodeStatus::Unreported;
        };
        if now.signed_duration_since(reported) > unreported_after {
            return NodeStatus::Unreported;
        }
        if self.latest_report_noop {
            return NodeStatus::Noop;
        }
        match self.latest_report_status.as_deref() {
            Some("failed") => NodeStatus::Failed,
            Some("changed") => NodeStatus::Changed,
            _ => NodeStatus::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(report_age_hours: i64, status: Option<&str>, noop: bool) -> Node {
        Node {
            name: "n1".into(),
            report_timestamp: Some(Utc::now() - Duration::hours(report_age_hours)),
            catalog_timestamp: None,
            facts_timestamp: None,
            latest_report_hash: None,
            latest_report_status: status.map(str::to_owned),
            latest_report_noop: noop,
            environment: None,
        }
    }

    #[test]
    fn never_reported_is_unreported() {
        let mut n = node(0, Some("changed"), false);
        n.report_timestamp = None;
        assert_eq!(
            n.status_at(Utc::now(), Duration::hours(2)),
            NodeStatus::Unreported
        );
    }

    #[test]
    fn stale_report_is_unreported_even_if_failed() {
        let n = node(5, Some("failed"), false);
        assert_eq!(
            n.status_at(Utc::now(), Duration::hours(2)),
            NodeStatus::Unreported
        );
    }

    #[test]
    fn noop_flag_wins_over_report_outcome() {
        let n = node(1, Some("changed"), true);
        assert_eq!(n.status_at(Utc::now(), Duration::hours(2)), NodeStatus::Noop);
    }

    #[test]
    fn fresh_report_maps_outcome() {
        assert_eq!(
            node(1, Some("failed"), false).status_at(Utc::now(), Duration::hours(2)),
            NodeStatus::Failed
        );
        assert_eq!(
            node(1, Some("changed"), false).status_at(Utc::now(), Duration::hours(2)),
            NodeStatus::Changed
        );
        assert_eq!(
            node(1, Some("unchanged"), false).status_at(Utc::now(), Duration::hours(2)),
            NodeStatus::Unchanged
        );
        assert_eq!(
            node(1, None, false).status_at(Utc::now(), Duration::hours(2)),
            NodeStatus::Unchanged
        );
    }

    #[test]
    fn filter_token_round_trip() {
        for status in NodeStatus::BADGES {
            let token = format!("node-{status}");
            assert_eq!(NodeStatus::from_filter_token(&token), Some(status));
        }
        assert_eq!(NodeStatus::from_filter_token("node-bogus"), None);
    }
}
