use crate::modules::invoicing::core::events::InvoiceEvent;
use crate::modules::invoicing::core::state::InvoiceState;

pub fn evolve(state: InvoiceState, event: InvoiceEvent) -> InvoiceState {
    match (state, event) {
        (InvoiceState::None, InvoiceEvent::InvoiceIssuedV1(e)) => InvoiceState::Issued {
            invoice_id: e.invoice_id,
            invoice_number: e.invoice_number,
            client: e.client,
            period: e.period,
            total: e.total,
            issued_at: e.issued_at,
            issued_by: e.issued_by,
        },
        (state, _) => state,
    }
}
