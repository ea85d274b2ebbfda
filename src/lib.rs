//! Kafka Topic Exporter
//!
//! Listens to KPI topics on a Kafka broker and exposes the values they carry
//! as Prometheus gauges.
//!
//! # Supported topics
//!
//! - `voltha.kpis` - OLT/ONU interface and bridge port statistics
//! - `onos.kpis` - ONOS per-port counters
//! - `onos.aaa.stats.kpis` - ONOS AAA (RADIUS and EAPOL) statistics
//! - `importer.kpis` - accepted, not exported yet
//!
//! Any other topic can carry one of these payloads by mapping it to a schema
//! in the configuration file.
//!
//! # CLI Usage
//!
//! ```bash
//! kafka-topic-exporter --config /etc/config/conf.yaml
//!
//! # Override the config file's log level and metrics port
//! kafka-topic-exporter --config conf.yaml --log-level debug --port 9100
//! ```

pub mod app;
pub mod config;
pub mod handler;
pub mod logging;
pub mod server;

pub use config::{Config, DecodeErrorPolicy};
pub use handler::KpiHandler;
