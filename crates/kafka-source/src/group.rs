use crate::error::{Error, Result};
use crate::listener::{run_topic_listener, ListenerStats, MessageHandler};
use crate::message::RawMessage;
use futures::Stream;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// A set of topic listeners that stop together.
///
/// Each listener runs as its own task. [`ListenerGroup::wait`] is the
/// barrier: it returns once every listener has exited. The first listener to
/// fail cancels the shared token so the rest wind down too.
pub struct ListenerGroup {
    tasks: JoinSet<(String, Result<ListenerStats>)>,
    shutdown: CancellationToken,
    remaining: Arc<AtomicUsize>,
}

impl ListenerGroup {
    pub fn new(shutdown: CancellationToken) -> Self {
        Self {
            tasks: JoinSet::new(),
            shutdown,
            remaining: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn spawn<S, H>(&mut self, topic: impl Into<String>, messages: S, handler: Arc<H>)
    where
        S: Stream<Item = Result<RawMessage>> + Send + Unpin + 'static,
        H: MessageHandler + ?Sized + 'static,
    {
        let topic = topic.into();
        let shutdown = self.shutdown.clone();
        let remaining = Arc::clone(&self.remaining);
        remaining.fetch_add(1, Ordering::SeqCst);

        self.tasks.spawn(async move {
            let result = run_topic_listener(&topic, messages, handler.as_ref(), &shutdown).await;
            let left = remaining.fetch_sub(1, Ordering::SeqCst) - 1;
            debug!(topic = %topic, remaining = left, "Topic listener exited");
            (topic, result)
        });
    }

    /// Listeners that have not exited yet.
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::SeqCst)
    }

    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Wait for every listener to exit.
    ///
    /// Returns the per-topic stats, or the first listener error after all
    /// the other listeners have been cancelled and joined.
    pub async fn wait(mut self) -> Result<Vec<(String, ListenerStats)>> {
        let mut stats = Vec::new();
        let mut first_error = None;

        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok((topic, Ok(topic_stats))) => stats.push((topic, topic_stats)),
                Ok((topic, Err(e))) => {
                    error!(topic = %topic, error = %e, "Topic listener failed, stopping all listeners");
                    self.shutdown.cancel();
                    first_error.get_or_insert(e);
                }
                Err(e) => {
                    error!(error = %e, "Topic listener task aborted, stopping all listeners");
                    self.shutdown.cancel();
                    first_error.get_or_insert(Error::Join(e));
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => {
                info!(listeners = stats.len(), "All topic listeners stopped");
                Ok(stats)
            }
        }
    }
}
