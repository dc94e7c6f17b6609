use crate::modules::invoicing::use_cases::list_invoices_by_client::projection::InvoiceRow;
use async_trait::async_trait;

#[async_trait]
pub trait InvoiceProjectionRepository: Send + Sync {
    async fn upsert(&self, row: InvoiceRow) -> anyhow::Result<()>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}
