use async_trait::async_trait;

/// Hands out invoice numbers. Numbers for one year are strictly increasing and
/// never handed out twice; gaps are allowed.
#[async_trait]
pub trait InvoiceNumberSequence: Send + Sync {
    async fn next(&self, year: i32) -> anyhow::Result<String>;
}

pub fn format_invoice_number(year: i32, sequence: u32) -> String {
    format!("FAC-{year}-{sequence:03}")
}
