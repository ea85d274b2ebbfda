//! Voltha KPI translation.
//!
//! Each slice of a Voltha event is handled according to its title. The
//! interface statistics (`Ethernet`, `PON`, `FEC_History`) are totals that
//! the device already aggregated, so they overwrite the gauge. The ONU
//! bridge port history carries per-interval deltas, so it accumulates into
//! the gauge instead, and it has no interface granularity.

use crate::metrics::{VolthaMetrics, NOT_APPLICABLE};
use kpi_types::{Metadata, SliceData, VolthaKpi};

/// The slice titles the exporter recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceCategory {
    Ethernet,
    Pon,
    EthernetBridgePortHistory,
    EthernetUniHistory,
    FecHistory,
    VolthaInternal,
    Unrecognized,
}

impl SliceCategory {
    pub fn from_title(title: &str) -> Self {
        match title {
            "Ethernet" => SliceCategory::Ethernet,
            "PON" => SliceCategory::Pon,
            "Ethernet_Bridge_Port_History" => SliceCategory::EthernetBridgePortHistory,
            "Ethernet_UNI_History" => SliceCategory::EthernetUniHistory,
            "FEC_History" => SliceCategory::FecHistory,
            "voltha.internal" => SliceCategory::VolthaInternal,
            _ => SliceCategory::Unrecognized,
        }
    }
}

pub fn export_voltha(kpi: &VolthaKpi, metrics: &VolthaMetrics) {
    for slice in &kpi.slice_data {
        match SliceCategory::from_title(&slice.metadata.title) {
            SliceCategory::Ethernet | SliceCategory::Pon | SliceCategory::FecHistory => {
                set_interface_counters(slice, metrics)
            }
            SliceCategory::EthernetBridgePortHistory => add_bridge_port_counters(slice, metrics),
            // ONU UNI history and voltha-internal slices are not exported.
            SliceCategory::EthernetUniHistory | SliceCategory::VolthaInternal => {}
            SliceCategory::Unrecognized => {}
        }
    }
}

fn set_interface_counters(slice: &SliceData, metrics: &VolthaMetrics) {
    let labels = interface_labels(&slice.metadata);
    let counters = &slice.metrics;

    metrics.tx_bytes.with_label_values(&labels).set(counters.tx_bytes);
    metrics.rx_bytes.with_label_values(&labels).set(counters.rx_bytes);
    metrics.tx_packets.with_label_values(&labels).set(counters.tx_packets);
    metrics.rx_packets.with_label_values(&labels).set(counters.rx_packets);
    metrics
        .tx_error_packets
        .with_label_values(&labels)
        .set(counters.tx_error_packets);
    metrics
        .rx_error_packets
        .with_label_values(&labels)
        .set(counters.rx_error_packets);
}

fn add_bridge_port_counters(slice: &SliceData, metrics: &VolthaMetrics) {
    let labels = device_labels(&slice.metadata);

    // Upstream samples are what the ONU transmitted.
    let (packets, bytes) = if slice.metadata.context.is_upstream() {
        (&metrics.tx_packets, &metrics.tx_bytes)
    } else {
        (&metrics.rx_packets, &metrics.rx_bytes)
    };

    packets.with_label_values(&labels).add(slice.metrics.packets);
    bytes.with_label_values(&labels).add(slice.metrics.octets);
}

fn interface_labels(metadata: &Metadata) -> [&str; 7] {
    [
        metadata.logical_device_id.as_str(),
        metadata.serial_number.as_str(),
        metadata.device_id.as_str(),
        metadata.context.interface_id.as_str(),
        metadata.context.pon_id.as_str(),
        metadata.context.port_number.as_str(),
        metadata.title.as_str(),
    ]
}

fn device_labels(metadata: &Metadata) -> [&str; 7] {
    [
        metadata.logical_device_id.as_str(),
        metadata.serial_number.as_str(),
        metadata.device_id.as_str(),
        NOT_APPLICABLE,
        NOT_APPLICABLE,
        NOT_APPLICABLE,
        metadata.title.as_str(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{labeled_series_count, port_context, port_labels, series_count, slice};
    use crate::KpiMetrics;
    use kpi_types::{Context, Metrics};

    fn kpi(slices: Vec<SliceData>) -> VolthaKpi {
        VolthaKpi {
            kind: "slice".to_string(),
            timestamp: 1536234062.0,
            slice_data: slices,
        }
    }

    fn interface_metrics() -> Metrics {
        Metrics {
            tx_bytes: 100.0,
            rx_bytes: 200.0,
            tx_packets: 3.0,
            rx_packets: 4.0,
            tx_error_packets: 5.0,
            rx_error_packets: 6.0,
            tx_bcast_packets: 99.0,
            ..Default::default()
        }
    }

    fn bridge_port(upstream: &str, packets: f64, octets: f64) -> SliceData {
        slice(
            "Ethernet_Bridge_Port_History",
            Metrics {
                packets,
                octets,
                ..Default::default()
            },
            Context {
                parent_class_id: "47".to_string(),
                parent_entity_id: "257".to_string(),
                upstream: upstream.to_string(),
                ..Default::default()
            },
        )
    }

    const BRIDGE_LABELS: [&str; 7] = [
        "0001c4a6a6d1f6a2",
        "BBSM00000001",
        "0001f8e8c5b2a3c1",
        "NA",
        "NA",
        "NA",
        "Ethernet_Bridge_Port_History",
    ];

    #[test]
    fn test_title_classification() {
        assert_eq!(SliceCategory::from_title("Ethernet"), SliceCategory::Ethernet);
        assert_eq!(SliceCategory::from_title("PON"), SliceCategory::Pon);
        assert_eq!(SliceCategory::from_title("FEC_History"), SliceCategory::FecHistory);
        assert_eq!(
            SliceCategory::from_title("voltha.internal"),
            SliceCategory::VolthaInternal
        );
        assert_eq!(SliceCategory::from_title("ethernet"), SliceCategory::Unrecognized);
        assert_eq!(SliceCategory::from_title(""), SliceCategory::Unrecognized);
    }

    #[test]
    fn test_ethernet_sets_six_counters() {
        let metrics = KpiMetrics::new().unwrap();
        let event = kpi(vec![slice("Ethernet", interface_metrics(), port_context())]);

        export_voltha(&event, &metrics.voltha);

        let labels = port_labels("Ethernet");
        let voltha = &metrics.voltha;
        assert_eq!(voltha.tx_bytes.with_label_values(&labels).get(), 100.0);
        assert_eq!(voltha.rx_bytes.with_label_values(&labels).get(), 200.0);
        assert_eq!(voltha.tx_packets.with_label_values(&labels).get(), 3.0);
        assert_eq!(voltha.rx_packets.with_label_values(&labels).get(), 4.0);
        assert_eq!(voltha.tx_error_packets.with_label_values(&labels).get(), 5.0);
        assert_eq!(voltha.rx_error_packets.with_label_values(&labels).get(), 6.0);
        assert_eq!(labeled_series_count(&metrics), 6);
    }

    #[test]
    fn test_set_is_idempotent_under_repetition() {
        let metrics = KpiMetrics::new().unwrap();
        let event = kpi(vec![slice("Ethernet", interface_metrics(), port_context())]);

        export_voltha(&event, &metrics.voltha);
        export_voltha(&event, &metrics.voltha);

        let tx_bytes = metrics.voltha.tx_bytes.with_label_values(&port_labels("Ethernet"));
        assert_eq!(tx_bytes.get(), 100.0);
    }

    #[test]
    fn test_pon_and_fec_history_share_the_interface_shape() {
        let metrics = KpiMetrics::new().unwrap();
        let event = kpi(vec![
            slice("PON", interface_metrics(), port_context()),
            slice("FEC_History", interface_metrics(), port_context()),
        ]);

        export_voltha(&event, &metrics.voltha);

        assert_eq!(
            metrics
                .voltha
                .rx_error_packets
                .with_label_values(&port_labels("FEC_History"))
                .get(),
            6.0
        );
        // Title is a label, so each category gets its own series.
        assert_eq!(series_count(&metrics, "voltha_tx_bytes_total"), 2);
        assert_eq!(labeled_series_count(&metrics), 12);
    }

    #[test]
    fn test_bridge_port_upstream_accumulates_into_tx() {
        let metrics = KpiMetrics::new().unwrap();
        let event = kpi(vec![bridge_port("True", 5.0, 640.0)]);

        export_voltha(&event, &metrics.voltha);
        export_voltha(&event, &metrics.voltha);

        let voltha = &metrics.voltha;
        assert_eq!(voltha.tx_packets.with_label_values(&BRIDGE_LABELS).get(), 10.0);
        assert_eq!(voltha.tx_bytes.with_label_values(&BRIDGE_LABELS).get(), 1280.0);
        assert_eq!(series_count(&metrics, "voltha_rx_packets_total"), 0);
        assert_eq!(series_count(&metrics, "voltha_rx_bytes_total"), 0);
    }

    #[test]
    fn test_bridge_port_downstream_accumulates_into_rx() {
        let metrics = KpiMetrics::new().unwrap();

        export_voltha(&kpi(vec![bridge_port("False", 2.0, 128.0)]), &metrics.voltha);
        export_voltha(&kpi(vec![bridge_port("", 3.0, 256.0)]), &metrics.voltha);

        let voltha = &metrics.voltha;
        assert_eq!(voltha.rx_packets.with_label_values(&BRIDGE_LABELS).get(), 5.0);
        assert_eq!(voltha.rx_bytes.with_label_values(&BRIDGE_LABELS).get(), 384.0);
        assert_eq!(series_count(&metrics, "voltha_tx_packets_total"), 0);
    }

    #[test]
    fn test_bridge_port_ignores_interface_context() {
        let metrics = KpiMetrics::new().unwrap();
        let mut sample = bridge_port("True", 1.0, 64.0);
        sample.metadata.context.interface_id = "3".to_string();
        sample.metadata.context.port_number = "16".to_string();

        export_voltha(&kpi(vec![sample]), &metrics.voltha);

        assert_eq!(
            metrics.voltha.tx_packets.with_label_values(&BRIDGE_LABELS).get(),
            1.0
        );
        assert_eq!(labeled_series_count(&metrics), 2);
    }

    #[test]
    fn test_unexported_titles_touch_nothing() {
        let metrics = KpiMetrics::new().unwrap();
        let before = metrics.encode_text().unwrap();

        let event = kpi(vec![
            slice("Ethernet_UNI_History", interface_metrics(), port_context()),
            slice("voltha.internal", interface_metrics(), port_context()),
            slice("Something_New", interface_metrics(), port_context()),
        ]);
        export_voltha(&event, &metrics.voltha);

        assert_eq!(labeled_series_count(&metrics), 0);
        assert_eq!(metrics.encode_text().unwrap(), before);
    }

    #[test]
    fn test_missing_context_uses_empty_labels() {
        let metrics = KpiMetrics::new().unwrap();
        let event = kpi(vec![slice("PON", interface_metrics(), Context::default())]);

        export_voltha(&event, &metrics.voltha);

        let labels = [
            "0001c4a6a6d1f6a2",
            "BBSM00000001",
            "0001f8e8c5b2a3c1",
            "",
            "",
            "",
            "PON",
        ];
        assert_eq!(metrics.voltha.tx_bytes.with_label_values(&labels).get(), 100.0);
    }
}
