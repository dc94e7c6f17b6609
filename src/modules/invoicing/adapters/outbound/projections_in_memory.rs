// In memory invoice read model and watermark repository.
//
// Rows are keyed by (client, period): at most one issued invoice exists per pair.

use crate::modules::invoicing::adapters::outbound::projections::{
    InvoiceProjectionRepository, WatermarkRepository,
};
use crate::modules::invoicing::use_cases::list_invoices_by_client::projection::{
    InvoiceRow, InvoiceView,
};
use crate::modules::invoicing::use_cases::list_invoices_by_client::queries_port::InvoiceQueries;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<HashMap<(String, String), InvoiceRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl InvoiceProjectionRepository for InMemoryProjections {
    async fn upsert(&self, row: InvoiceRow) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        let mut guard = self.rows.write().await;
        guard.insert((row.client.clone(), row.period.clone()), row);
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl InvoiceQueries for InMemoryProjections {
    async fn list_by_client(
        &self,
        client: &str,
        offset: u64,
        limit: u64,
        sort_by_issued_at_desc: bool,
    ) -> anyhow::Result<Vec<InvoiceView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        let guard = self.rows.read().await;
        let mut items: Vec<InvoiceRow> = guard
            .iter()
            .filter(|((c, _), _)| c == client)
            .map(|(_, row)| row.clone())
            .collect();

        items.sort_by(|a, b| {
            a.issued_at
                .cmp(&b.issued_at)
                .then_with(|| a.invoice_id.cmp(&b.invoice_id))
        });
        if sort_by_issued_at_desc {
            items.reverse();
        }

        let start = offset as usize;
        if start >= items.len() {
            return Ok(Vec::new());
        }
        let end = start.saturating_add(limit as usize).min(items.len());
        Ok(items[start..end]
            .iter()
            .cloned()
            .map(InvoiceView::from)
            .collect())
    }

    async fn find_by_period(
        &self,
        client: &str,
        period: &str,
    ) -> anyhow::Result<Option<InvoiceView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        Ok(self
            .rows
            .read()
            .await
            .get(&(client.to_string(), period.to_string()))
            .cloned()
            .map(InvoiceView::from))
    }
}
