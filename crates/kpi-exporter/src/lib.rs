//! Schema-aware translation of KPI events into Prometheus gauges.
//!
//! # Architecture
//!
//! ```text
//! (topic, payload) → Dispatcher → kpi_types::decode → KpiRecord → export → KpiMetrics
//! ```
//!
//! # Modules
//!
//! - [`schema`] - Schema registry and topic subscriptions, validated at startup
//! - [`dispatch`] - Routes a raw message to its decoder and exporter
//! - [`export`] - Per-schema translation rules (Set vs Add, label placeholders)
//! - [`metrics`] - The explicitly owned registry of every exported gauge
//! - [`error`] - Error types for registration and subscription resolution

pub mod dispatch;
pub mod error;
pub mod export;
pub mod metrics;
pub mod schema;

#[cfg(test)]
mod testing;

pub use dispatch::Dispatcher;
pub use error::{Error, Result};
pub use export::export;
pub use metrics::{KpiMetrics, OnosAaaMetrics, OnosMetrics, VolthaMetrics, NOT_APPLICABLE};
pub use schema::{SchemaRegistry, TopicSubscription};
