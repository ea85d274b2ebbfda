//! Routes raw messages to their decoder and exporter.

use crate::export::export;
use crate::metrics::KpiMetrics;
use crate::schema::TopicSubscription;
use kpi_types::{decode, DecodeError, SchemaKind};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{trace, warn};

/// Decodes and exports messages for a fixed set of subscriptions.
///
/// Cheap to share between listeners: routing is read-only and every gauge
/// update is atomic on its own.
pub struct Dispatcher {
    routes: HashMap<String, SchemaKind>,
    metrics: Arc<KpiMetrics>,
}

impl Dispatcher {
    pub fn new(subscriptions: &[TopicSubscription], metrics: Arc<KpiMetrics>) -> Self {
        let routes = subscriptions
            .iter()
            .map(|sub| (sub.topic.clone(), sub.schema))
            .collect();
        Self { routes, metrics }
    }

    pub fn schema_for(&self, topic: &str) -> Option<SchemaKind> {
        self.routes.get(topic).copied()
    }

    pub fn metrics(&self) -> &Arc<KpiMetrics> {
        &self.metrics
    }

    /// Decode `payload` with the schema routed for `topic` and export it.
    ///
    /// A topic with no route is logged and dropped without error. A payload
    /// that does not decode is returned as an error and nothing is exported.
    pub fn dispatch(&self, topic: &str, payload: &[u8]) -> Result<(), DecodeError> {
        let Some(schema) = self.schema_for(topic) else {
            warn!(topic, "No schema routed for topic, dropping message");
            return Ok(());
        };

        let record = decode(schema, payload)?;
        trace!(topic, %schema, "Exporting KPI record");
        export(&record, &self.metrics);
        Ok(())
    }
}
