use crate::modules::invoicing::core::events::v1::invoice_issued::InvoiceIssuedV1;

/// Domain intents produced by the decider as part of an Accepted decision.
/// The outbound intent_outbox adapter translates these into OutboxRows.
pub enum InvoiceIntent {
    PublishInvoiceIssued { payload: InvoiceIssuedV1 },
}
