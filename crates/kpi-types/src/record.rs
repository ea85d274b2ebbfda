//! Schema identifiers and the polymorphic decoded record.

use crate::error::{DecodeError, ParseSchemaError, Result};
use crate::{ImporterKpi, OnosAaaKpi, OnosKpi, VolthaKpi};
use serde::de::DeserializeOwned;
use std::fmt;
use std::str::FromStr;

/// The payload shapes the exporter understands.
///
/// The identifier of each schema is the name of the topic it was originally
/// published on, which is also the default schema for a subscription that
/// does not name one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Voltha,
    Onos,
    OnosAaa,
    Importer,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 4] = [
        SchemaKind::Voltha,
        SchemaKind::Onos,
        SchemaKind::OnosAaa,
        SchemaKind::Importer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Voltha => "voltha.kpis",
            SchemaKind::Onos => "onos.kpis",
            SchemaKind::OnosAaa => "onos.aaa.stats.kpis",
            SchemaKind::Importer => "importer.kpis",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaKind {
    type Err = ParseSchemaError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SchemaKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseSchemaError(s.to_string()))
    }
}

/// A decoded KPI payload, one variant per schema.
#[derive(Debug, Clone, PartialEq)]
pub enum KpiRecord {
    Voltha(VolthaKpi),
    Onos(OnosKpi),
    OnosAaa(OnosAaaKpi),
    Importer(ImporterKpi),
}

impl KpiRecord {
    pub fn schema(&self) -> SchemaKind {
        match self {
            KpiRecord::Voltha(_) => SchemaKind::Voltha,
            KpiRecord::Onos(_) => SchemaKind::Onos,
            KpiRecord::OnosAaa(_) => SchemaKind::OnosAaa,
            KpiRecord::Importer(_) => SchemaKind::Importer,
        }
    }
}

/// Decode `payload` as a record of the given schema.
pub fn decode(schema: SchemaKind, payload: &[u8]) -> Result<KpiRecord> {
    match schema {
        SchemaKind::Voltha => parse(schema, payload).map(KpiRecord::Voltha),
        SchemaKind::Onos => parse(schema, payload).map(KpiRecord::Onos),
        SchemaKind::OnosAaa => parse(schema, payload).map(KpiRecord::OnosAaa),
        SchemaKind::Importer => parse(schema, payload).map(KpiRecord::Importer),
    }
}

pub(crate) fn parse<T: DeserializeOwned>(schema: SchemaKind, payload: &[u8]) -> Result<T> {
    serde_json::from_slice(payload).map_err(|source| DecodeError::Json { schema, source })
}
