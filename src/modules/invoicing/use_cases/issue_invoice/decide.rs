use crate::modules::invoicing::core::{
    billing::{InvoiceComputation, is_valid_vat_rate},
    events::{InvoiceEvent, v1::invoice_issued::InvoiceIssuedV1},
    intents::InvoiceIntent,
    period::BillingPeriod,
    state::InvoiceState,
};
use crate::modules::invoicing::use_cases::issue_invoice::{
    command::IssueInvoice,
    decision::{DecideError, Decision},
};

/// Guards run before a number is allocated, so a rejected request never
/// consumes one.
pub fn check_issuable(
    state: &InvoiceState,
    command: &IssueInvoice,
    computation: &InvoiceComputation,
) -> Result<(), DecideError> {
    if let Some(invoice_number) = state.issued_invoice_number() {
        return Err(DecideError::AlreadyIssued {
            invoice_number: invoice_number.to_string(),
        });
    }
    if BillingPeriod::parse(&command.period).is_none() {
        return Err(DecideError::InvalidPeriod);
    }
    if !is_valid_vat_rate(command.vat_rate) {
        return Err(DecideError::InvalidVatRate);
    }
    if command.client.is_empty() {
        return Err(DecideError::MissingClient);
    }
    if computation.is_empty() {
        return Err(DecideError::NothingToBill);
    }
    if !computation.missing_rates.is_empty() {
        return Err(DecideError::MissingRates(computation.missing_rates.clone()));
    }
    Ok(())
}

pub fn decide_issue(
    state: &InvoiceState,
    command: IssueInvoice,
    invoice_number: String,
    computation: InvoiceComputation,
) -> Decision {
    if let Err(reason) = check_issuable(state, &command, &computation) {
        return Decision::Rejected { reason };
    }

    let payload = InvoiceIssuedV1 {
        invoice_id: command.invoice_id,
        invoice_number,
        client: command.client,
        period: command.period,
        lines: computation.lines,
        total_hours: computation.total_hours,
        subtotal: computation.subtotal,
        vat_rate: command.vat_rate,
        vat: computation.vat,
        total: computation.total,
        issued_at: command.issued_at,
        issued_by: command.issued_by,
    };
    Decision::Accepted {
        events: vec![InvoiceEvent::InvoiceIssuedV1(payload.clone())],
        intents: vec![InvoiceIntent::PublishInvoiceIssued { payload }],
    }
}
