use crate::modules::invoicing::use_cases::list_invoices_by_client::projection::InvoiceView;
use async_trait::async_trait;

#[async_trait]
pub trait InvoiceQueries {
    async fn list_by_client(
        &self,
        client: &str,
        offset: u64,
        limit: u64,
        sort_by_issued_at_desc: bool,
    ) -> anyhow::Result<Vec<InvoiceView>>;

    async fn find_by_period(&self, client: &str, period: &str)
    -> anyhow::Result<Option<InvoiceView>>;
}
