//! ONOS port statistics translation.

use crate::metrics::OnosMetrics;
use kpi_types::OnosKpi;

pub fn export_onos(kpi: &OnosKpi, metrics: &OnosMetrics) {
    for port in &kpi.ports {
        let labels = [kpi.device_id.as_str(), port.port_id.as_str()];

        metrics.tx_bytes.with_label_values(&labels).set(port.tx_bytes);
        metrics.rx_bytes.with_label_values(&labels).set(port.rx_bytes);
        metrics.tx_packets.with_label_values(&labels).set(port.tx_packets);
        metrics.rx_packets.with_label_values(&labels).set(port.rx_packets);
        metrics
            .tx_drop_packets
            .with_label_values(&labels)
            .set(port.tx_packets_drop);
        metrics
            .rx_drop_packets
            .with_label_values(&labels)
            .set(port.rx_packets_drop);
    }
}
