use crate::modules::invoicing::adapters::outbound::billing_sources_in_memory::InMemoryBillingSources;
use crate::modules::invoicing::adapters::outbound::invoice_numbers_in_memory::InMemoryInvoiceNumbers;
use crate::modules::invoicing::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::invoicing::core::billing::ApprovalState;
use crate::modules::invoicing::core::events::InvoiceEvent;
use crate::modules::invoicing::use_cases::issue_invoice::handler::IssueInvoiceHandler;
use crate::modules::invoicing::use_cases::list_invoices_by_client::handler::Projector;
use crate::modules::invoicing::use_cases::list_invoices_by_client::queries_port::InvoiceQueries;
use crate::modules::invoicing::use_cases::preview_invoice::query::invoice_stream_id;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::tests::fixtures::billing::{banco_nacional_february, entry};
use crate::tests::fixtures::commands::issue_invoice::IssueInvoiceBuilder;
use std::sync::Arc;

#[tokio::test]
async fn lists_invoices_by_client() {
    let mut records = banco_nacional_february();
    records.time_entries.push(entry(
        "Carlos Martinez",
        "Portal Bancario v2",
        "2026-03",
        4.0,
        ApprovalState::Approved,
    ));
    let store = Arc::new(InMemoryEventStore::<InvoiceEvent>::new());
    let outbox = Arc::new(InMemoryDomainOutbox::new());
    let projections = Arc::new(InMemoryProjections::new());
    let projector = Projector {
        name: "invoice_summary".into(),
        repository: projections.clone(),
        watermark_repository: projections.clone(),
    };
    let handler = IssueInvoiceHandler::new(
        "invoices",
        Arc::new(InMemoryBillingSources::with_records(records)),
        store.clone(),
        outbox,
        Arc::new(InMemoryInvoiceNumbers::new()),
    );

    let commands: Vec<_> = [
        ("Banco Nacional", "2026-01", 3_000),
        ("Banco Nacional", "2026-03", 1_000),
        ("TechCorp Solutions", "2026-02", 4_000),
        ("Banco Nacional", "2026-02", 2_000),
    ]
    .into_iter()
    .map(|(client, period, issued_at)| {
        IssueInvoiceBuilder::new()
            .invoice_id(format!("inv-{period}-{issued_at}"))
            .client(client)
            .period(period)
            .issued_at(issued_at)
            .build()
    })
    .collect();

    for command in commands.iter().cloned() {
        let stream_id = invoice_stream_id(&command.client, &command.period);
        handler.handle(command).await.unwrap();

        let loaded = store.load(&stream_id).await.unwrap();
        projector
            .apply_one(&stream_id, 1, loaded.events.first().unwrap())
            .await
            .unwrap();
    }

    let list = projections
        .list_by_client("Banco Nacional", 0, 10, true)
        .await
        .unwrap();

    assert_eq!(list.len(), 3);
    assert!(list[0].issued_at >= list[1].issued_at);
    assert!(list[1].issued_at >= list[2].issued_at);
    assert_eq!(list[0].period, "2026-01");
    assert_eq!(list[0].invoice_number, "FAC-2026-001");
    assert_eq!(list[2].period, "2026-03");
    assert_eq!(list[2].invoice_number, "FAC-2026-002");
    assert!(list.iter().all(|i| i.client == "Banco Nacional"));
}
