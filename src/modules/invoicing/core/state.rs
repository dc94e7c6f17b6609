/// Lifecycle of the invoice stream of one (client, period) pair.
/// `Issued` doubles as the lock that keeps the period from being billed twice.
#[derive(Debug, Clone, PartialEq)]
pub enum InvoiceState {
    None,
    Issued {
        invoice_id: String,
        invoice_number: String,
        client: String,
        period: String,
        total: f64,
        issued_at: i64,
        issued_by: String,
    },
}

impl InvoiceState {
    pub fn issued_invoice_number(&self) -> Option<&str> {
        match self {
            InvoiceState::None => None,
            InvoiceState::Issued { invoice_number, .. } => Some(invoice_number),
        }
    }
}
