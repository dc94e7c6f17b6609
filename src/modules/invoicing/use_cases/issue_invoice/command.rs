#[derive(Debug, Clone, PartialEq)]
pub struct IssueInvoice {
    pub invoice_id: String,
    pub client: String,
    pub period: String,
    pub vat_rate: f64,
    pub issued_at: i64,
    pub issued_by: String,
}
