use crate::modules::invoicing::adapters::outbound::billing_sources_in_memory::InMemoryBillingSources;
use crate::modules::invoicing::adapters::outbound::invoice_numbers_in_memory::InMemoryInvoiceNumbers;
use crate::modules::invoicing::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::invoicing::core::events::InvoiceEvent;
use crate::modules::invoicing::use_cases::issue_invoice::handler::IssueInvoiceHandler;
use crate::modules::invoicing::use_cases::list_invoices_by_client::handler::Projector;
use crate::modules::invoicing::use_cases::list_invoices_by_client::queries_port::InvoiceQueries;
use crate::modules::invoicing::use_cases::preview_invoice::handler::PreviewInvoiceHandler;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use std::sync::Arc;

pub type InvoiceEventStore = InMemoryEventStore<InvoiceEvent>;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn InvoiceQueries + Send + Sync>,
    pub preview_handler: Arc<PreviewInvoiceHandler<InMemoryBillingSources, InvoiceEventStore>>,
    pub issue_handler: Arc<
        IssueInvoiceHandler<
            InMemoryBillingSources,
            InvoiceEventStore,
            InMemoryDomainOutbox,
            InMemoryInvoiceNumbers,
        >,
    >,
    pub event_store: Arc<InvoiceEventStore>,
    pub projector: Arc<Projector<InMemoryProjections, InMemoryProjections>>,
    pub default_vat_rate: f64,
}

impl AppState {
    /// Wires every handler on top of the given sources and event store, with
    /// fresh in-memory outbox, numbering and projections.
    pub fn in_memory(
        topic: &str,
        default_vat_rate: f64,
        sources: Arc<InMemoryBillingSources>,
        event_store: Arc<InvoiceEventStore>,
    ) -> Self {
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let numbers = Arc::new(InMemoryInvoiceNumbers::new());
        let projections = Arc::new(InMemoryProjections::new());
        let projector = Arc::new(Projector::new(
            "invoice_summary",
            projections.clone(),
            projections.clone(),
        ));
        let preview_handler = Arc::new(PreviewInvoiceHandler::new(
            sources.clone(),
            event_store.clone(),
        ));
        let issue_handler = Arc::new(IssueInvoiceHandler::new(
            topic,
            sources,
            event_store.clone(),
            outbox,
            numbers,
        ));
        Self {
            queries: projections,
            preview_handler,
            issue_handler,
            event_store,
            projector,
            default_vat_rate,
        }
    }

    /// Inline projection so queries see the new row immediately.
    pub async fn project_latest(&self, stream_id: &str) -> anyhow::Result<()> {
        let loaded = self.event_store.load(stream_id).await?;
        if let Some(last) = loaded.events.last() {
            self.projector
                .apply_one(stream_id, loaded.version, last)
                .await?;
        }
        Ok(())
    }
}
