//! `onos.kpis` payloads: per-port counters of one ONOS device.

use crate::de::null_as_default;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OnosKpi {
    #[serde(rename = "deviceId", deserialize_with = "null_as_default")]
    pub device_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ports: Vec<OnosPort>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OnosPort {
    #[serde(rename = "portId", deserialize_with = "null_as_default")]
    pub port_id: String,
    #[serde(rename = "pktRx", deserialize_with = "null_as_default")]
    pub rx_packets: f64,
    #[serde(rename = "pktTx", deserialize_with = "null_as_default")]
    pub tx_packets: f64,
    #[serde(rename = "bytesRx", deserialize_with = "null_as_default")]
    pub rx_bytes: f64,
    #[serde(rename = "bytesTx", deserialize_with = "null_as_default")]
    pub tx_bytes: f64,
    #[serde(rename = "pktRxDrp", deserialize_with = "null_as_default")]
    pub rx_packets_drop: f64,
    #[serde(rename = "pktTxDrp", deserialize_with = "null_as_default")]
    pub tx_packets_drop: f64,
}
