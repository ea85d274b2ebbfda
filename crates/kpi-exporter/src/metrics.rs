//! The metric registry.
//!
//! Every gauge the exporter can touch is created and registered once, when
//! [`KpiMetrics`] is constructed. Metric names, help strings and label order
//! are part of the contract with existing scrapers and dashboards and must
//! not change.

use crate::error::Result;
use prometheus::{Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};

/// Label value used when a sample does not carry a dimension.
pub const NOT_APPLICABLE: &str = "NA";

pub const VOLTHA_LABELS: [&str; 7] = [
    "logical_device_id",
    "serial_number",
    "device_id",
    "interface_id",
    "pon_id",
    "port_number",
    "title",
];

pub const ONOS_LABELS: [&str; 2] = ["device_id", "port_id"];

/// All exported gauges, grouped by the schema family allowed to write them.
pub struct KpiMetrics {
    registry: Registry,
    pub voltha: VolthaMetrics,
    pub onos: OnosMetrics,
    pub onos_aaa: OnosAaaMetrics,
}

impl KpiMetrics {
    /// Create the gauges in a fresh, private registry.
    pub fn new() -> Result<Self> {
        Self::with_registry(Registry::new())
    }

    /// Create the gauges in `registry`.
    ///
    /// Fails if any of the metric names is already registered there.
    pub fn with_registry(registry: Registry) -> Result<Self> {
        let voltha = VolthaMetrics::register(&registry)?;
        let onos = OnosMetrics::register(&registry)?;
        let onos_aaa = OnosAaaMetrics::register(&registry)?;
        Ok(Self {
            registry,
            voltha,
            onos,
            onos_aaa,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render every registered series in the Prometheus text format.
    pub fn encode_text(&self) -> Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

pub struct VolthaMetrics {
    pub tx_bytes: GaugeVec,
    pub rx_bytes: GaugeVec,
    pub tx_packets: GaugeVec,
    pub rx_packets: GaugeVec,
    pub tx_error_packets: GaugeVec,
    pub rx_error_packets: GaugeVec,
}

impl VolthaMetrics {
    fn register(registry: &Registry) -> Result<Self> {
        let vec = |name, help| gauge_vec(registry, name, help, &VOLTHA_LABELS);
        Ok(Self {
            tx_bytes: vec("voltha_tx_bytes_total", "Number of total bytes transmitted")?,
            rx_bytes: vec("voltha_rx_bytes_total", "Number of total bytes received")?,
            tx_packets: vec(
                "voltha_tx_packets_total",
                "Number of total packets transmitted",
            )?,
            rx_packets: vec("voltha_rx_packets_total", "Number of total packets received")?,
            tx_error_packets: vec(
                "voltha_tx_error_packets_total",
                "Number of total transmitted packets error",
            )?,
            rx_error_packets: vec(
                "voltha_rx_error_packets_total",
                "Number of total received packets error",
            )?,
        })
    }
}

pub struct OnosMetrics {
    pub tx_bytes: GaugeVec,
    pub rx_bytes: GaugeVec,
    pub tx_packets: GaugeVec,
    pub rx_packets: GaugeVec,
    pub tx_drop_packets: GaugeVec,
    pub rx_drop_packets: GaugeVec,
}

impl OnosMetrics {
    fn register(registry: &Registry) -> Result<Self> {
        let vec = |name, help| gauge_vec(registry, name, help, &ONOS_LABELS);
        Ok(Self {
            tx_bytes: vec("onos_tx_bytes_total", "Number of total bytes transmitted")?,
            rx_bytes: vec("onos_rx_bytes_total", "Number of total bytes received")?,
            tx_packets: vec("onos_tx_packets_total", "Number of total packets transmitted")?,
            rx_packets: vec("onos_rx_packets_total", "Number of total packets received")?,
            tx_drop_packets: vec(
                "onos_tx_drop_packets_total",
                "Number of total transmitted packets dropped",
            )?,
            rx_drop_packets: vec(
                "onos_rx_drop_packets_total",
                "Number of total received packets dropped",
            )?,
        })
    }
}

/// ONOS AAA statistics. These are unlabeled: the AAA app reports one
/// snapshot for the whole controller.
pub struct OnosAaaMetrics {
    pub rx_accept_responses: Gauge,
    pub rx_reject_responses: Gauge,
    pub rx_challenge_responses: Gauge,
    pub tx_access_requests: Gauge,
    pub rx_invalid_validators: Gauge,
    pub rx_unknown_type: Gauge,
    pub pending_requests: Gauge,
    pub rx_dropped_responses: Gauge,
    pub rx_malformed_responses: Gauge,
    pub rx_unknown_server: Gauge,
    pub request_rtt_millis: Gauge,
    pub request_re_tx: Gauge,
    pub eapol_logoff_rx: Gauge,
    pub eapol_res_identity_msg_trans: Gauge,
    pub auth_success_trans: Gauge,
    pub auth_failure_trans: Gauge,
    pub start_req_trans: Gauge,
    pub tx_access_req_pkt: Gauge,
    pub rx_access_chall_pkt: Gauge,
    pub eap_pkt_tx_auth_eap: Gauge,
    pub trans_resp_not_nak: Gauge,
}

impl OnosAaaMetrics {
    fn register(registry: &Registry) -> Result<Self> {
        let g = |name, help| gauge(registry, name, help);
        Ok(Self {
            rx_accept_responses: g(
                "onosaaa_rx_accept_responses",
                "Number of access accept packets received from the server",
            )?,
            rx_reject_responses: g(
                "onosaaa_rx_reject_responses",
                "Number of access reject packets received from the server",
            )?,
            rx_challenge_responses: g(
                "onosaaa_rx_challenge_response",
                "Number of access challenge packets received from the server",
            )?,
            tx_access_requests: g(
                "onosaaa_tx_access_requests",
                "Number of access request packets sent to the server",
            )?,
            rx_invalid_validators: g(
                "onosaaa_rx_invalid_validators",
                "Number of access response packets received from the server with an invalid validator",
            )?,
            rx_unknown_type: g(
                "onosaaa_rx_unknown_type",
                "Number of packets of an unknown RADIUS type received from the accounting server",
            )?,
            pending_requests: g(
                "onosaaa_pending_responses",
                "Number of access request packets pending a response from the server",
            )?,
            rx_dropped_responses: g(
                "onosaaa_rx_dropped_responses",
                "Number of dropped packets received from the accounting server",
            )?,
            rx_malformed_responses: g(
                "onosaaa_rx_malformed_responses",
                "Number of malformed access response packets received from the server",
            )?,
            rx_unknown_server: g(
                "onosaaa_rx_from_unknown_server",
                "Number of packets received from an unknown server",
            )?,
            request_rtt_millis: g(
                "onosaaa_request_rttmillis",
                "Roundtrip packet time to the accounting server in Miliseconds",
            )?,
            request_re_tx: g(
                "onosaaa_request_re_tx",
                "Number of access request packets retransmitted to the server",
            )?,
            eapol_logoff_rx: g(
                "onosaaa_eapol_Logoff_Rx",
                "Number of EAPOL logoff messages received resulting in disconnected state",
            )?,
            eapol_res_identity_msg_trans: g(
                "onosaaa_eapol_Res_IdentityMsg_Trans",
                "Number of authenticating transitions due to EAP response or identity message",
            )?,
            auth_success_trans: g(
                "onosaaa_auth_Success_Trans",
                "Number of authenticated transitions due to successful authentication",
            )?,
            auth_failure_trans: g(
                "onosaaa_auth_Failure_Trans",
                "Number of transitions to held due to authentication failure",
            )?,
            start_req_trans: g(
                "onosaaa_start_Req_Trans",
                "Number of transitions to connecting due to start request",
            )?,
            tx_access_req_pkt: g(
                "onosaaa_access_Req_Pkt_Tx",
                "Number of access request packets sent",
            )?,
            rx_access_chall_pkt: g(
                "onosaaa_access_Chall_Pkt_Rx",
                "Number of access challenge packets received",
            )?,
            eap_pkt_tx_auth_eap: g(
                "onosaaa_eap_Pkt_Tx_auth_Eap",
                "Number of EAP request packets sent due to the authenticator choosing the EAP method",
            )?,
            trans_resp_not_nak: g(
                "onosaaa_trans_Resp_not_Nak",
                "Number of transitions to response (received response other that NAK)",
            )?,
        })
    }
}

fn gauge_vec(registry: &Registry, name: &str, help: &str, labels: &[&str]) -> Result<GaugeVec> {
    let vec = GaugeVec::new(Opts::new(name, help), labels)?;
    registry.register(Box::new(vec.clone()))?;
    Ok(vec)
}

fn gauge(registry: &Registry, name: &str, help: &str) -> Result<Gauge> {
    let gauge = Gauge::with_opts(Opts::new(name, help))?;
    registry.register(Box::new(gauge.clone()))?;
    Ok(gauge)
}
