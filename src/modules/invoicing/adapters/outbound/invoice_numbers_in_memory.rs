use crate::modules::invoicing::use_cases::issue_invoice::numbering_port::{
    InvoiceNumberSequence, format_invoice_number,
};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Per-year counters behind a mutex.
#[derive(Default)]
pub struct InMemoryInvoiceNumbers {
    last_issued: Mutex<HashMap<i32, u32>>,
    is_offline: bool,
}

impl InMemoryInvoiceNumbers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl InvoiceNumberSequence for InMemoryInvoiceNumbers {
    async fn next(&self, year: i32) -> anyhow::Result<String> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Invoice number sequence offline"));
        }

        let mut guard = self.last_issued.lock().await;
        let counter = guard.entry(year).or_insert(0);
        *counter = counter
            .checked_add(1)
            .ok_or_else(|| anyhow::anyhow!("invoice sequence for {year} exhausted"))?;
        Ok(format_invoice_number(year, *counter))
    }
}
