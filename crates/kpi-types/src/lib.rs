//! Typed KPI records and their JSON decoders.
//!
//! Every Kafka topic the exporter understands carries one of four payload
//! shapes. This crate owns those shapes and nothing else: it turns raw
//! payload bytes into a [`KpiRecord`] and leaves the translation into metrics
//! to `kpi-exporter`.
//!
//! # Schemas
//!
//! | Schema identifier       | Record                          |
//! |-------------------------|---------------------------------|
//! | `voltha.kpis`           | [`voltha::VolthaKpi`]           |
//! | `onos.kpis`             | [`onos::OnosKpi`]               |
//! | `onos.aaa.stats.kpis`   | [`onos_aaa::OnosAaaKpi`]        |
//! | `importer.kpis`         | [`importer::ImporterKpi`]       |
//!
//! Decoding is strict about the type of every field a record declares and
//! permissive about everything else: unknown fields are ignored and missing
//! or `null` fields take their zero value.
//!
//! ```ignore
//! use kpi_types::{decode, SchemaKind};
//!
//! let record = decode(SchemaKind::Onos, br#"{"deviceId":"of:1","ports":[]}"#)?;
//! ```

mod de;
pub mod error;
pub mod importer;
pub mod onos;
pub mod onos_aaa;
pub mod record;
pub mod voltha;

pub use error::{DecodeError, ParseSchemaError, Result};
pub use importer::ImporterKpi;
pub use onos::{OnosKpi, OnosPort};
pub use onos_aaa::OnosAaaKpi;
pub use record::{decode, KpiRecord, SchemaKind};
pub use voltha::{Context, Metadata, Metrics, SliceData, VolthaKpi};
