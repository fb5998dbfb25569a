use serde::{Deserialize, Serialize};

/// Fully qualified path of a population metric, e.g.
/// `inventory.population:name=num-nodes`.
pub fn population_path(name: &str) -> String {
    format!("inventory.population:name={name}")
}

/// Population metric names consumed by the index view.
pub const NUM_NODES: &str = "num-nodes";
pub const NUM_RESOURCES: &str = "num-resources";
pub const AVG_RESOURCES_PER_NODE: &str = "avg-resources-per-node";

/// A named numeric figure fetched from the metrics endpoint.
///
/// Mirrors the three wire forms the endpoint produces: string gauges,
/// integer counters, and fractional derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Metric {
    /// Render the figure for a headline display.
    ///
    /// Integers and strings pass through verbatim. Fractional values are
    /// rounded to a whole number and right-aligned in a 10-character
    /// field, matching the dashboard's fixed-width numeric convention
    /// (`60.3` renders as `"        60"`).
    #[allow(clippy::cast_possible_truncation)]
    pub fn headline(&self) -> String {
        match self {
            Self::Int(v) => v.to_string(),
            Self::Float(v) => format!("{:>10}", v.round() as i64),
            Self::Text(v) => v.clone(),
        }
    }
}

impl From<i64> for Metric {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Metric {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_passes_text_and_int_through() {
        assert_eq!(Metric::Text("50".into()).headline(), "50");
        assert_eq!(Metric::Int(60).headline(), "60");
    }

    #[test]
    fn headline_renders_floats_fixed_width() {
        assert_eq!(Metric::Float(60.3).headline(), "        60");
        assert_eq!(Metric::Float(0.0).headline(), "         0");
        assert_eq!(Metric::Float(1234567890.0).headline(), "1234567890");
    }

    #[test]
    fn population_path_shape() {
        assert_eq!(
            population_path(NUM_NODES),
            "inventory.population:name=num-nodes"
        );
        assert_eq!(
            population_path(AVG_RESOURCES_PER_NODE),
            "inventory.population:name=avg-resources-per-node"
        );
    }
}
