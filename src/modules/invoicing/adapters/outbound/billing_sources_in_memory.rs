use crate::modules::invoicing::core::billing::{Project, RateAssignment, TimeEntry};
use crate::modules::invoicing::use_cases::preview_invoice::sources_port::BillingSources;
use serde::Deserialize;
use tokio::sync::RwLock;

/// Snapshot of the back-office records the invoicing reads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BillingRecords {
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub rates: Vec<RateAssignment>,
}

#[derive(Default)]
pub struct InMemoryBillingSources {
    records: RwLock<BillingRecords>,
    is_offline: bool,
}

impl InMemoryBillingSources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: BillingRecords) -> Self {
        Self {
            records: RwLock::new(records),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn replace(&self, records: BillingRecords) {
        *self.records.write().await = records;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Billing sources offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl BillingSources for InMemoryBillingSources {
    async fn time_entries(&self, period: &str) -> anyhow::Result<Vec<TimeEntry>> {
        self.ensure_online()?;
        Ok(self
            .records
            .read()
            .await
            .time_entries
            .iter()
            .filter(|e| e.period_key == period)
            .cloned()
            .collect())
    }

    async fn projects(&self) -> anyhow::Result<Vec<Project>> {
        self.ensure_online()?;
        Ok(self.records.read().await.projects.clone())
    }

    async fn rates(&self) -> anyhow::Result<Vec<RateAssignment>> {
        self.ensure_online()?;
        Ok(self.records.read().await.rates.clone())
    }
}
