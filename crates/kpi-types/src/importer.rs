//! `importer.kpis` payloads.

use crate::de::null_as_default;
use serde::Deserialize;

/// Importer events only identify the device so far; no counters are read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImporterKpi {
    #[serde(rename = "deviceId", deserialize_with = "null_as_default")]
    pub device_id: String,
}
