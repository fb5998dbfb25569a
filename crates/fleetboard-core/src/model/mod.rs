// Domain model: environments, nodes, metrics.

pub mod environment;
pub mod metric;
pub mod node;

pub use environment::{EnvScope, Environment};
pub use metric::Metric;
pub use node::{Node, NodeStatus};
