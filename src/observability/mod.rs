//! Observability module for monitoring and metrics.
//!
//! Counters for page views, hidden or missing lookups and votes, reported
//! through `tracing`.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};
