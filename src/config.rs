//! Exporter configuration.
//!
//! Loaded once at startup from a YAML file (mounted from a ConfigMap in the
//! usual deployment). Key names follow the existing deployment's file.

use anyhow::{bail, Context};
use kafka_source::{ConsumerConfig, StartOffset};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "/etc/config/conf.yaml";

/// Port the metrics endpoint falls back to when none is configured
pub const DEFAULT_METRICS_PORT: u16 = 8080;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub broker: BrokerInfo,
    #[serde(default)]
    pub logger: LoggerInfo,
    #[serde(default)]
    pub target: TargetInfo,
    #[serde(default)]
    pub on_decode_error: DecodeErrorPolicy,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to load config file {}", path.display()))
    }

    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).context("Invalid YAML")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.broker.host.trim().is_empty() {
            bail!("broker.host must not be empty");
        }
        if self.broker.topics.is_empty() {
            bail!("broker.topics must list at least one topic");
        }
        Ok(())
    }
}

/// Kafka connection and the topics to listen to
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerInfo {
    #[serde(default)]
    pub name: String,
    /// Bootstrap servers (comma-separated `host:port` list)
    pub host: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub topics: Vec<TopicEntry>,
    #[serde(default = "default_group_id")]
    pub group_id: String,
    #[serde(default)]
    pub offset: OffsetReset,
    #[serde(default = "default_session_timeout_ms")]
    pub session_timeout_ms: u64,
    #[serde(default = "default_metadata_timeout_secs")]
    pub metadata_timeout_secs: u64,
}

impl BrokerInfo {
    pub fn consumer_config(&self) -> ConsumerConfig {
        ConsumerConfig {
            brokers: self.host.clone(),
            group_id: self.group_id.clone(),
            session_timeout_ms: self.session_timeout_ms.to_string(),
            metadata_timeout: Duration::from_secs(self.metadata_timeout_secs),
            start_offset: self.offset.into(),
        }
    }

    /// `(topic, schema)` pairs in configuration order.
    pub fn subscriptions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.topics.iter().map(|entry| (entry.topic(), entry.schema()))
    }
}

fn default_group_id() -> String {
    "kafka-topic-exporter".to_string()
}

fn default_session_timeout_ms() -> u64 {
    6000
}

fn default_metadata_timeout_secs() -> u64 {
    10
}

/// A configured topic.
///
/// A plain name is decoded with the schema of the same name. The mapping
/// form lets any topic carry one of the known schemas.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TopicEntry {
    Name(String),
    Mapping { topic: String, schema: String },
}

impl TopicEntry {
    pub fn topic(&self) -> &str {
        match self {
            TopicEntry::Name(name) => name,
            TopicEntry::Mapping { topic, .. } => topic,
        }
    }

    pub fn schema(&self) -> &str {
        match self {
            TopicEntry::Name(name) => name,
            TopicEntry::Mapping { schema, .. } => schema,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetReset {
    #[default]
    Latest,
    Earliest,
}

impl From<OffsetReset> for StartOffset {
    fn from(offset: OffsetReset) -> Self {
        match offset {
            OffsetReset::Latest => StartOffset::Latest,
            OffsetReset::Earliest => StartOffset::Earliest,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggerInfo {
    #[serde(default, rename = "loglevel")]
    pub log_level: String,
    /// Remote log collector. Only reported; logs go to stderr.
    #[serde(default)]
    pub host: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetInfo {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub description: String,
}

impl TargetInfo {
    /// The configured port, or [`DEFAULT_METRICS_PORT`] when unset.
    pub fn effective_port(&self) -> u16 {
        if self.port == 0 {
            warn!(
                "Prometheus target port not configured, using default {}",
                DEFAULT_METRICS_PORT
            );
            return DEFAULT_METRICS_PORT;
        }
        self.port
    }
}

/// What a listener does with a message that fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DecodeErrorPolicy {
    /// Log the failure and keep consuming.
    #[default]
    Drop,
    /// Stop every listener and exit with an error.
    Fatal,
}

/// Logging verbosity as written in `logger.loglevel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Case-insensitive. `fatal` and `panic` map to `Error`.
    pub fn parse(level: &str) -> Option<Self> {
        match level.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" | "fatal" | "panic" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
broker:
  name: voltha-kafka
  host: kafka:9092
  description: The kafka broker
  topics:
    - voltha.kpis
    - onos.kpis
    - topic: olt-1.kpis
      schema: voltha.kpis
  offset: earliest
  session_timeout_ms: 10000
logger:
  loglevel: WARN
  host: logger:9092
target:
  type: prometheus-target
  name: http-server
  port: 9090
  description: http target for prometheus
on_decode_error: fatal
"#;

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_yaml(FULL).unwrap();

        assert_eq!(config.broker.host, "kafka:9092");
        assert_eq!(config.broker.group_id, "kafka-topic-exporter");
        assert_eq!(config.broker.offset, OffsetReset::Earliest);
        assert_eq!(config.logger.log_level, "WARN");
        assert_eq!(config.logger.host, "logger:9092");
        assert_eq!(config.target.kind, "prometheus-target");
        assert_eq!(config.target.effective_port(), 9090);
        assert_eq!(config.on_decode_error, DecodeErrorPolicy::Fatal);

        let subscriptions: Vec<_> = config.broker.subscriptions().collect();
        assert_eq!(
            subscriptions,
            vec![
                ("voltha.kpis", "voltha.kpis"),
                ("onos.kpis", "onos.kpis"),
                ("olt-1.kpis", "voltha.kpis"),
            ]
        );
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_yaml("broker:\n  host: kafka:9092\n  topics: [voltha.kpis]\n").unwrap();

        assert_eq!(config.broker.offset, OffsetReset::Latest);
        assert_eq!(config.broker.session_timeout_ms, 6000);
        assert_eq!(config.target.port, 0);
        assert_eq!(config.target.effective_port(), DEFAULT_METRICS_PORT);
        assert_eq!(config.on_decode_error, DecodeErrorPolicy::Drop);
    }

    #[test]
    fn test_consumer_config() {
        let config = Config::from_yaml(FULL).unwrap();
        let consumer = config.broker.consumer_config();

        assert_eq!(consumer.brokers, "kafka:9092");
        assert_eq!(consumer.session_timeout_ms, "10000");
        assert_eq!(consumer.metadata_timeout, Duration::from_secs(10));
        assert_eq!(consumer.start_offset, StartOffset::Earliest);
    }

    #[test]
    fn test_rejects_missing_topics() {
        let err = Config::from_yaml("broker:\n  host: kafka:9092\n").unwrap_err();
        assert!(err.to_string().contains("broker.topics"));
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let yaml = "broker:\n  host: kafka:9092\n  topics: [onos.kpis]\non_decode_error: ignore\n";
        assert!(Config::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("Warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("panic"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("fatal").map(LogLevel::as_directive), Some("error"));
        assert_eq!(LogLevel::parse("verbose"), None);
        assert_eq!(LogLevel::parse(""), None);
    }
}
