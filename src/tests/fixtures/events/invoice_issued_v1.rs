// Shared test fixture for InvoiceIssuedV1.

use crate::modules::invoicing::core::billing::InvoiceLineItem;
use crate::modules::invoicing::core::events::v1::invoice_issued::InvoiceIssuedV1;
use crate::modules::invoicing::use_cases::list_invoices_by_client::projection::InvoiceRow;
use crate::tests::fixtures::commands::issue_invoice::IssueInvoiceBuilder;

/// Canonical event: Carlos Martinez's February hours on Portal Bancario v2.
pub fn make_invoice_issued_v1_event() -> InvoiceIssuedV1 {
    let command = IssueInvoiceBuilder::new().build();
    InvoiceIssuedV1 {
        invoice_id: command.invoice_id,
        invoice_number: "FAC-2026-001".to_string(),
        client: command.client,
        period: command.period,
        lines: vec![InvoiceLineItem {
            employee_name: "Carlos Martinez".to_string(),
            project_name: "Portal Bancario v2".to_string(),
            hours: 16.0,
            hourly_rate: 85.0,
            subtotal: 1360.0,
        }],
        total_hours: 16.0,
        subtotal: 1360.0,
        vat_rate: command.vat_rate,
        vat: 285.6,
        total: 1645.6,
        issued_at: command.issued_at,
        issued_by: command.issued_by,
    }
}

pub fn make_invoice_row() -> InvoiceRow {
    let event = make_invoice_issued_v1_event();
    InvoiceRow {
        invoice_id: event.invoice_id,
        invoice_number: event.invoice_number,
        client: event.client,
        period: event.period,
        lines: event.lines,
        total_hours: event.total_hours,
        subtotal: event.subtotal,
        vat_rate: event.vat_rate,
        vat: event.vat,
        total: event.total,
        issued_at: event.issued_at,
        issued_by: event.issued_by,
        last_event_id: Some("Invoice-Banco Nacional-2026-02:1".to_string()),
    }
}
