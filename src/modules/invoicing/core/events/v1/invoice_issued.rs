// Event payload: InvoiceIssuedV1.
//
// Records that the preview of one client's billing period was accepted and
// numbered. Lines and totals are a snapshot; later rate or time entry changes
// never rewrite an issued invoice.
//
// Versioning: add fields where possible, otherwise introduce InvoiceIssuedV2.
// Timestamps are epoch milliseconds.

use crate::modules::invoicing::core::billing::InvoiceLineItem;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct InvoiceIssuedV1 {
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
