//! Command-line interface for kafka-topic-exporter

use clap::Parser;
use kafka_topic_exporter::config::{Config, DecodeErrorPolicy, DEFAULT_CONFIG_PATH};
use kafka_topic_exporter::{app, logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kafka-topic-exporter")]
#[command(about = "Exports KPI events consumed from Kafka topics as Prometheus metrics")]
#[command(version)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, env = "KTE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log level, overrides `logger.loglevel` (RUST_LOG still wins)
    #[arg(long, env = "KTE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Metrics port, overrides `target.port`
    #[arg(long, env = "KTE_PORT")]
    port: Option<u16>,

    /// Decode failure policy, overrides `on_decode_error`
    #[arg(long, value_enum)]
    on_decode_error: Option<DecodeErrorPolicy>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_file(&cli.config)?;
    if let Some(log_level) = cli.log_level {
        config.logger.log_level = log_level;
    }
    if let Some(port) = cli.port {
        config.target.port = port;
    }
    if let Some(policy) = cli.on_decode_error {
        config.on_decode_error = policy;
    }

    logging::init(&config.logger.log_level);
    tracing::info!(
        broker = %config.broker.name,
        target = %config.target.name,
        on_decode_error = ?config.on_decode_error,
        "Starting kafka-topic-exporter"
    );

    app::run(config).await
}
