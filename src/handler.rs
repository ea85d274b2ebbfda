use crate::config::DecodeErrorPolicy;
use kafka_source::{HandlerError, MessageHandler, RawMessage};
use kpi_exporter::Dispatcher;
use std::sync::Arc;
use tracing::error;

/// Routes each consumed message through the [`Dispatcher`] and applies the
/// configured [`DecodeErrorPolicy`] to decode failures.
pub struct KpiHandler {
    dispatcher: Arc<Dispatcher>,
    policy: DecodeErrorPolicy,
}

impl KpiHandler {
    pub fn new(dispatcher: Arc<Dispatcher>, policy: DecodeErrorPolicy) -> Self {
        Self { dispatcher, policy }
    }
}

impl MessageHandler for KpiHandler {
    fn handle(&self, message: &RawMessage) -> Result<(), HandlerError> {
        let Err(e) = self.dispatcher.dispatch(&message.topic, &message.payload) else {
            return Ok(());
        };

        match self.policy {
            DecodeErrorPolicy::Drop => {
                error!(
                    topic = %message.topic,
                    partition = message.partition,
                    offset = message.offset,
                    error = %e,
                    "Dropping message that failed to decode"
                );
                Ok(())
            }
            DecodeErrorPolicy::Fatal => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kpi_exporter::{KpiMetrics, SchemaRegistry};

    fn handler(policy: DecodeErrorPolicy) -> KpiHandler {
        let subscriptions = SchemaRegistry::builtin()
            .resolve([("onos.aaa.stats.kpis", "onos.aaa.stats.kpis")])
            .unwrap();
        let metrics = Arc::new(KpiMetrics::new().unwrap());
        KpiHandler::new(Arc::new(Dispatcher::new(&subscriptions, metrics)), policy)
    }

    fn malformed() -> RawMessage {
        RawMessage::new("onos.aaa.stats.kpis", r#"{"pendingRequests": "many"}"#)
    }

    #[test]
    fn test_drop_policy_swallows_decode_errors() {
        assert!(handler(DecodeErrorPolicy::Drop).handle(&malformed()).is_ok());
    }

    #[test]
    fn test_fatal_policy_returns_decode_errors() {
        let err = handler(DecodeErrorPolicy::Fatal)
            .handle(&malformed())
            .unwrap_err();
        assert!(err.to_string().contains("onos.aaa.stats.kpis"));
    }

    #[test]
    fn test_valid_message_updates_metrics() {
        let handler = handler(DecodeErrorPolicy::Fatal);
        let message = RawMessage::new("onos.aaa.stats.kpis", r#"{"pendingRequests": 3}"#);

        handler.handle(&message).unwrap();

        let metrics = handler.dispatcher.metrics();
        assert_eq!(metrics.onos_aaa.pending_requests.get(), 3.0);
    }
}
