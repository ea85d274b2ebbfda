//! `voltha.kpis` payloads.
//!
//! A Voltha KPI event is hierarchical: one event carries an ordered list of
//! slices, each describing a single interface or statistics group of one
//! device. The slice `title` says which group it is and therefore which of
//! the counters in [`Metrics`] are meaningful.

use crate::de::null_as_default;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VolthaKpi {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(rename = "ts", deserialize_with = "null_as_default")]
    pub timestamp: f64,
    #[serde(rename = "slice_data", deserialize_with = "null_as_default")]
    pub slice_data: Vec<SliceData>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SliceData {
    #[serde(deserialize_with = "null_as_default")]
    pub metrics: Metrics,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "null_as_default")]
    pub logical_device_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "serial_no", deserialize_with = "null_as_default")]
    pub serial_number: String,
    #[serde(rename = "ts", deserialize_with = "null_as_default")]
    pub timestamp: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub device_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub context: Context,
}

/// Where on the device a slice was measured.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Context {
    #[serde(rename = "intf_id", deserialize_with = "null_as_default")]
    pub interface_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pon_id: String,
    #[serde(rename = "port_no", deserialize_with = "null_as_default")]
    pub port_number: String,

    // ONU performance monitoring
    #[serde(deserialize_with = "null_as_default")]
    pub parent_class_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub parent_entity_id: String,
    /// `"True"` when the ONU reported the sample in the upstream direction.
    #[serde(deserialize_with = "null_as_default")]
    pub upstream: String,
}

impl Context {
    pub fn is_upstream(&self) -> bool {
        self.upstream == "True"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Metrics {
    #[serde(deserialize_with = "null_as_default")]
    pub tx_bytes: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tx_packets: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tx_error_packets: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tx_bcast_packets: f64,
    #[serde(rename = "tx_ucast_packets", deserialize_with = "null_as_default")]
    pub tx_unicast_packets: f64,
    #[serde(rename = "tx_mcast_packets", deserialize_with = "null_as_default")]
    pub tx_multicast_packets: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub rx_bytes: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub rx_packets: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub rx_error_packets: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub rx_bcast_packets: f64,
    #[serde(rename = "rx_mcast_packets", deserialize_with = "null_as_default")]
    pub rx_multicast_packets: f64,

    // Ethernet_Bridge_Port_History
    #[serde(deserialize_with = "null_as_default")]
    pub packets: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub octets: f64,
}
