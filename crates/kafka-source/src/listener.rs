use crate::error::{Error, HandlerError, Result};
use crate::message::RawMessage;
use futures::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Processes the messages of a topic, one at a time and in arrival order.
///
/// Returning an error stops the listener and, through
/// [`crate::ListenerGroup`], every other listener. Handlers that want to
/// skip a bad message should log it and return `Ok(())`.
pub trait MessageHandler: Send + Sync {
    fn handle(&self, message: &RawMessage) -> std::result::Result<(), HandlerError>;
}

impl<F> MessageHandler for F
where
    F: Fn(&RawMessage) -> std::result::Result<(), HandlerError> + Send + Sync,
{
    fn handle(&self, message: &RawMessage) -> std::result::Result<(), HandlerError> {
        self(message)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerStats {
    /// Messages passed to the handler
    pub messages: u64,
    /// Consumer errors that were logged and skipped
    pub errors: u64,
}

/// Consume `messages` until the stream ends or `shutdown` is cancelled.
///
/// Consumer errors are logged and skipped. A handler error ends the listener
/// with [`Error::Handler`].
pub async fn run_topic_listener<S, H>(
    topic: &str,
    mut messages: S,
    handler: &H,
    shutdown: &CancellationToken,
) -> Result<ListenerStats>
where
    S: Stream<Item = Result<RawMessage>> + Unpin,
    H: MessageHandler + ?Sized,
{
    let mut stats = ListenerStats::default();
    info!(topic, "Topic listener started");

    loop {
        let next = tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                debug!(topic, "Topic listener cancelled");
                break;
            }
            next = messages.next() => next,
        };

        match next {
            Some(Ok(message)) => {
                stats.messages += 1;
                handler
                    .handle(&message)
                    .map_err(|source| Error::Handler {
                        topic: topic.to_string(),
                        source,
                    })?;
            }
            Some(Err(e)) => {
                stats.errors += 1;
                warn!(topic, error = %e, "Failed to receive message, continuing");
            }
            None => {
                info!(topic, "Message stream ended");
                break;
            }
        }
    }

    debug!(
        topic,
        messages = stats.messages,
        errors = stats.errors,
        "Topic listener stopped"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use std::sync::Mutex;

    fn message(payload: &str) -> Result<RawMessage> {
        Ok(RawMessage::new("voltha.kpis", payload.as_bytes()))
    }

    #[tokio::test]
    async fn test_handles_messages_in_order() {
        let seen = Mutex::new(Vec::new());
        let handler = |m: &RawMessage| -> std::result::Result<(), HandlerError> {
            seen.lock().unwrap().push(String::from_utf8(m.payload.clone())?);
            Ok(())
        };
        let messages = stream::iter(vec![message("a"), message("b"), message("c")]);

        let stats = run_topic_listener("voltha.kpis", messages, &handler, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(stats.messages, 3);
        assert_eq!(*seen.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_consumer_errors_are_skipped() {
        let handled = Mutex::new(0);
        let handler = |_: &RawMessage| -> std::result::Result<(), HandlerError> {
            *handled.lock().unwrap() += 1;
            Ok(())
        };
        let messages = stream::iter(vec![
            message("a"),
            Err(Error::Consumer("broker went away".to_string())),
            message("b"),
        ]);

        let stats = run_topic_listener("onos.kpis", messages, &handler, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(stats, ListenerStats { messages: 2, errors: 1 });
        assert_eq!(*handled.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_handler_error_stops_the_listener() {
        let handled = Mutex::new(Vec::new());
        let handler = |m: &RawMessage| -> std::result::Result<(), HandlerError> {
            handled.lock().unwrap().push(m.payload.clone());
            if m.payload == b"bad" {
                return Err("malformed payload".into());
            }
            Ok(())
        };
        let messages = stream::iter(vec![message("ok"), message("bad"), message("never")]);

        let err = run_topic_listener("onos.kpis", messages, &handler, &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(&err, Error::Handler { topic, .. } if topic == "onos.kpis"));
        assert_eq!(handled.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_cancellation_stops_an_idle_listener() {
        let shutdown = CancellationToken::new();
        let handler = |_: &RawMessage| -> std::result::Result<(), HandlerError> { Ok(()) };
        shutdown.cancel();

        let stats = run_topic_listener(
            "importer.kpis",
            stream::pending::<Result<RawMessage>>(),
            &handler,
            &shutdown,
        )
        .await
        .unwrap();

        assert_eq!(stats, ListenerStats::default());
    }
}
