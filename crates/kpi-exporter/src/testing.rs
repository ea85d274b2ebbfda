//! Helpers shared by the unit tests of this crate.

use crate::KpiMetrics;
use kpi_types::{Context, Metadata, Metrics, SliceData};
use prometheus::proto::MetricFamily;

pub(crate) fn family(metrics: &KpiMetrics, name: &str) -> Option<MetricFamily> {
    metrics
        .registry()
        .gather()
        .into_iter()
        .find(|mf| mf.get_name() == name)
}

/// Number of labeled series that exist for `name`.
pub(crate) fn series_count(metrics: &KpiMetrics, name: &str) -> usize {
    family(metrics, name).map_or(0, |mf| mf.get_metric().len())
}

/// Number of labeled series across every Voltha and ONOS family.
pub(crate) fn labeled_series_count(metrics: &KpiMetrics) -> usize {
    metrics
        .registry()
        .gather()
        .iter()
        .filter(|mf| !mf.get_name().starts_with("onosaaa_"))
        .map(|mf| mf.get_metric().len())
        .sum()
}

pub(crate) fn slice(title: &str, metrics: Metrics, context: Context) -> SliceData {
    SliceData {
        metrics,
        metadata: Metadata {
            logical_device_id: "0001c4a6a6d1f6a2".to_string(),
            title: title.to_string(),
            serial_number: "BBSM00000001".to_string(),
            timestamp: 1536234062.0,
            device_id: "0001f8e8c5b2a3c1".to_string(),
            context,
        },
    }
}

pub(crate) fn port_context() -> Context {
    Context {
        interface_id: "1".to_string(),
        pon_id: "0".to_string(),
        port_number: "65536".to_string(),
        ..Default::default()
    }
}

pub(crate) fn port_labels(title: &str) -> [&str; 7] {
    [
        "0001c4a6a6d1f6a2",
        "BBSM00000001",
        "0001f8e8c5b2a3c1",
        "1",
        "0",
        "65536",
        title,
    ]
}
