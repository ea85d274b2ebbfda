//! Startup, steady state and shutdown of the exporter.

use crate::config::Config;
use crate::handler::KpiHandler;
use crate::server;
use anyhow::Context;
use kafka_source::{ListenerGroup, MessageHandler, SharedConsumer};
use kpi_exporter::{Dispatcher, KpiMetrics, SchemaRegistry};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Run the exporter until a shutdown signal or a fatal listener error.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let subscriptions = SchemaRegistry::builtin()
        .resolve(config.broker.subscriptions())
        .context("Invalid topic configuration")?;
    for subscription in &subscriptions {
        info!(topic = %subscription.topic, schema = %subscription.schema, "Subscribing");
    }
    if !config.logger.host.is_empty() {
        info!(host = %config.logger.host, "Remote log collector configured; logging to stderr");
    }

    let metrics = Arc::new(KpiMetrics::new().context("Failed to register metrics")?);
    let dispatcher = Arc::new(Dispatcher::new(&subscriptions, Arc::clone(&metrics)));
    let handler: Arc<dyn MessageHandler> =
        Arc::new(KpiHandler::new(dispatcher, config.on_decode_error));

    let shutdown = CancellationToken::new();
    let listener = server::bind(config.target.effective_port()).await?;
    let server_task = {
        let metrics = Arc::clone(&metrics);
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            let result = server::serve(listener, metrics, shutdown.clone()).await;
            if let Err(e) = &result {
                error!(error = %e, "Metrics server stopped, shutting down");
                shutdown.cancel();
            }
            result
        })
    };

    info!(broker = %config.broker.host, "Connecting to broker");
    let consumer_config = config.broker.consumer_config();
    let topics: Vec<String> = subscriptions.iter().map(|s| s.topic.clone()).collect();
    // Metadata requests block until the brokers answer.
    let connected = tokio::task::spawn_blocking(move || {
        let consumer = SharedConsumer::connect(consumer_config)?;
        let streams = consumer.split_topics(&topics)?;
        Ok::<_, kafka_source::Error>((consumer, streams))
    })
    .await
    .context("Kafka connection task failed")?;
    let (consumer, streams) = match connected {
        Ok(connected) => connected,
        Err(e) => {
            shutdown.cancel();
            return Err(e).context("Failed to connect to Kafka");
        }
    };

    let driver = consumer.spawn_driver(shutdown.clone());
    let mut group = ListenerGroup::new(shutdown.clone());
    for (topic, stream) in streams {
        group.spawn(topic, stream, Arc::clone(&handler));
    }
    info!(listeners = group.remaining(), "Topic listeners running");

    let signal_task = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = shutdown_signal() => {
                    info!("Shutdown signal received, stopping listeners");
                    shutdown.cancel();
                }
                _ = shutdown.cancelled() => {}
            }
        })
    };

    let outcome = group.wait().await;

    // Barrier passed: every listener is gone, release everything else.
    shutdown.cancel();
    if let Err(e) = driver.await {
        warn!(error = %e, "Consumer driver task failed");
    }
    consumer.close();
    signal_task.abort();
    match server_task.await {
        Ok(Err(e)) => warn!(error = %e, "Metrics server exited with an error"),
        Err(e) => warn!(error = %e, "Metrics server task failed"),
        Ok(Ok(())) => {}
    }

    outcome.context("Topic listener failed")?;
    info!("Exporter stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
