use kpi_types::ImporterKpi;
use tracing::info;

/// Importer events are decoded but no metrics are defined for them yet.
pub fn export_importer(kpi: &ImporterKpi) {
    info!(device_id = %kpi.device_id, "Importer KPI export is not implemented yet");
}
