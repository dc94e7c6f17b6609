use std::path::Path;

use anyhow::Context;

use crate::modules::invoicing::adapters::outbound::billing_sources_in_memory::BillingRecords;

/// Reads the billing records the in-memory sources start with.
pub async fn load_billing_records(path: &Path) -> anyhow::Result<BillingRecords> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let records: BillingRecords = serde_json::from_str(&raw)
        .with_context(|| format!("parsing seed file {}", path.display()))?;
    tracing::info!(
        time_entries = records.time_entries.len(),
        projects = records.projects.len(),
        rates = records.rates.len(),
        "billing records seeded"
    );
    Ok(records)
}
