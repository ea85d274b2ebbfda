//! Per-schema translation of decoded records into gauge updates.
//!
//! Each exporter only receives the metric group of its own schema family,
//! so a record can never touch another family's instruments.

pub mod importer;
pub mod onos;
pub mod onos_aaa;
pub mod voltha;

use crate::metrics::KpiMetrics;
use kpi_types::KpiRecord;

pub use importer::export_importer;
pub use onos::export_onos;
pub use onos_aaa::export_onos_aaa;
pub use voltha::{export_voltha, SliceCategory};

/// Apply `record` to the gauges of its schema family.
pub fn export(record: &KpiRecord, metrics: &KpiMetrics) {
    match record {
        KpiRecord::Voltha(kpi) => export_voltha(kpi, &metrics.voltha),
        KpiRecord::Onos(kpi) => export_onos(kpi, &metrics.onos),
        KpiRecord::OnosAaa(kpi) => export_onos_aaa(kpi, &metrics.onos_aaa),
        KpiRecord::Importer(kpi) => export_importer(kpi),
    }
}
