use crate::modules::invoicing::core::billing::InvoiceLineItem;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InvoiceRow {
    pub invoice_id: String,
    pub invoice_number: String,
    pub client: String,
    pub period: String,
    pub lines: Vec<InvoiceLineItem>,
    pub total_hours: f64,
    pub subtotal: f64,
    pub vat_rate: f64,
    pub vat: f64,
    pub total: f64,
    pub issued_at: i64,
    pub issued_by: String,
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InvoiceView {
    pub invoice_id: String,
    pub invoice_number: String,
    pub client: String,
    pub period: String,
    pub lines: Vec<InvoiceLineItem>,
    pub total_hours: f64,
    pub subtotal: f64,
    pub vat_rate: f64,
    pub vat: f64,
    pub total: f64,
    pub issued_at: i64,
    pub issued_by: String,
}

impl From<InvoiceRow> for InvoiceView {
    fn from(row: InvoiceRow) -> Self {
        Self {
            invoice_id: row.invoice_id,
            invoice_number: row.invoice_number,
            client: row.client,
            period: row.period,
            lines: row.lines,
            total_hours: row.total_hours,
            subtotal: row.subtotal,
            vat_rate: row.vat_rate,
            vat: row.vat,
            total: row.total,
            issued_at: row.issued_at,
            issued_by: row.issued_by,
        }
    }
}
