use crate::modules::invoicing::core::billing::RateKey;
use crate::modules::invoicing::core::events::InvoiceEvent;
use crate::modules::invoicing::core::intents::InvoiceIntent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("period already invoiced as {invoice_number}")]
    AlreadyIssued { invoice_number: String },

    #[error("period must be formatted as YYYY-MM")]
    InvalidPeriod,

    #[error("vat rate must be a non-negative number")]
    InvalidVatRate,

    #[error("client is required")]
    MissingClient,

    #[error("no approved hours to bill")]
    NothingToBill,

    #[error("missing hourly rate for {}", join_keys(.0))]
    MissingRates(Vec<RateKey>),
}

fn join_keys(keys: &[RateKey]) -> String {
    keys.iter()
        .map(RateKey::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub enum Decision {
    Accepted {
        events: Vec<InvoiceEvent>,
        intents: Vec<InvoiceIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}
