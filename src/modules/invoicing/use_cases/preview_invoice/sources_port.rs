use crate::modules::invoicing::core::billing::{Project, RateAssignment, TimeEntry};
use async_trait::async_trait;

/// Read access to the records owned by the back-office CRUD service.
///
/// Implementations may pre-filter (for example to one period or to the rates
/// active today); the aggregation applies its own filters regardless.
#[async_trait]
pub trait BillingSources: Send + Sync {
    async fn time_entries(&self, period: &str) -> anyhow::Result<Vec<TimeEntry>>;
    async fn projects(&self) -> anyhow::Result<Vec<Project>>;
    async fn rates(&self) -> anyhow::Result<Vec<RateAssignment>>;
}
