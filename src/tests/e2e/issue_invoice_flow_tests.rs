use crate::modules::invoicing::adapters::outbound::billing_sources_in_memory::InMemoryBillingSources;
use crate::modules::invoicing::adapters::outbound::invoice_numbers_in_memory::InMemoryInvoiceNumbers;
use crate::modules::invoicing::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::invoicing::core::billing::ApprovalState;
use crate::modules::invoicing::core::events::InvoiceEvent;
use crate::modules::invoicing::use_cases::errors::ApplicationError;
use crate::modules::invoicing::use_cases::issue_invoice::handler::IssueInvoiceHandler;
use crate::modules::invoicing::use_cases::list_invoices_by_client::handler::Projector;
use crate::modules::invoicing::use_cases::list_invoices_by_client::queries_port::InvoiceQueries;
use crate::modules::invoicing::use_cases::preview_invoice::handler::PreviewInvoiceHandler;
use crate::modules::invoicing::use_cases::preview_invoice::query::{
    PreviewInvoice, invoice_stream_id,
};
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::tests::fixtures::billing::{banco_nacional_february, entry};
use crate::tests::fixtures::commands::issue_invoice::IssueInvoiceBuilder;
use std::sync::Arc;

#[tokio::test]
async fn previews_issues_and_locks_a_billing_period() {
    let sources = Arc::new(InMemoryBillingSources::with_records(
        banco_nacional_february(),
    ));
    let store = Arc::new(InMemoryEventStore::<InvoiceEvent>::new());
    let outbox = Arc::new(InMemoryDomainOutbox::new());
    let projections = Arc::new(InMemoryProjections::new());
    let projector = Projector::new("invoice_summary", projections.clone(), projections.clone());
    let preview = PreviewInvoiceHandler::new(sources.clone(), store.clone());
    let issue = IssueInvoiceHandler::new(
        "invoices",
        sources.clone(),
        store.clone(),
        outbox.clone(),
        Arc::new(InMemoryInvoiceNumbers::new()),
    );
    let query = PreviewInvoice {
        client: "Banco Nacional".into(),
        period: "2026-02".into(),
        vat_rate: 0.21,
    };

    let draft = preview.handle(query.clone()).await.unwrap();
    assert_eq!(draft.issued_invoice_number, None);

    let command = IssueInvoiceBuilder::new().build();
    let stream_id = invoice_stream_id(&command.client, &command.period);
    let issued = issue.handle(command.clone()).await.unwrap();
    assert_eq!(issued.lines, draft.computation.lines);
    assert_eq!(issued.total, draft.computation.total);

    let loaded = store.load(&stream_id).await.unwrap();
    projector
        .apply_one(&stream_id, loaded.version, loaded.events.last().unwrap())
        .await
        .unwrap();

    // Hours approved after issuing show up in the preview but never reach the issued invoice.
    let mut records = banco_nacional_february();
    records.time_entries.push(entry(
        "Maria Gomez",
        "Dashboard Analytics",
        "2026-02",
        2.0,
        ApprovalState::Approved,
    ));
    sources.replace(records).await;

    let locked = preview.handle(query).await.unwrap();
    assert_eq!(locked.issued_invoice_number, Some(issued.invoice_number.clone()));
    assert!(locked.computation.total > issued.total);

    let again = issue.handle(command).await;
    assert!(matches!(again, Err(ApplicationError::Domain(_))));

    let listed = projections
        .list_by_client("Banco Nacional", 0, 10, true)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].invoice_number, issued.invoice_number);
    assert_eq!(listed[0].total, issued.total);
    assert_eq!(outbox.rows.lock().await.len(), 1);
}
