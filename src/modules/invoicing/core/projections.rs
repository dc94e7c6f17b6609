use crate::modules::invoicing::core::events::InvoiceEvent;
use crate::modules::invoicing::use_cases::list_invoices_by_client::projection::InvoiceRow;

pub enum Mutation {
    Upsert(InvoiceRow),
}

pub fn apply(stream_id: &str, version: i64, event: &InvoiceEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        InvoiceEvent::InvoiceIssuedV1(details) => vec![Mutation::Upsert(InvoiceRow {
            invoice_id: details.invoice_id.clone(),
            invoice_number: details.invoice_number.clone(),
            client: details.client.clone(),
            period: details.period.clone(),
            lines: details.lines.clone(),
            total_hours: details.total_hours,
            subtotal: details.subtotal,
            vat_rate: details.vat_rate,
            vat: details.vat,
            total: details.total,
            issued_at: details.issued_at,
            issued_by: details.issued_by.clone(),
            last_event_id: Some(stream_key),
        })],
    }
}
