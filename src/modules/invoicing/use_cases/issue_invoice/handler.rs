use crate::modules::invoicing::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::invoicing::core::billing::is_valid_vat_rate;
use crate::modules::invoicing::core::events::InvoiceEvent;
use crate::modules::invoicing::core::events::v1::invoice_issued::InvoiceIssuedV1;
use crate::modules::invoicing::core::period::BillingPeriod;
use crate::modules::invoicing::use_cases::errors::ApplicationError;
use crate::modules::invoicing::use_cases::issue_invoice::command::IssueInvoice;
use crate::modules::invoicing::use_cases::issue_invoice::decide::{check_issuable, decide_issue};
use crate::modules::invoicing::use_cases::issue_invoice::decision::{DecideError, Decision};
use crate::modules::invoicing::use_cases::issue_invoice::numbering_port::InvoiceNumberSequence;
use crate::modules::invoicing::use_cases::preview_invoice::handler::{
    load_computation, load_state,
};
use crate::modules::invoicing::use_cases::preview_invoice::query::invoice_stream_id;
use crate::modules::invoicing::use_cases::preview_invoice::sources_port::BillingSources;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct IssueInvoiceHandler<TSources, TEventStore, TOutbox, TNumbers>
where
    TSources: BillingSources + 'static,
    TEventStore: EventStore<InvoiceEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
    TNumbers: InvoiceNumberSequence + 'static,
{
    topic: String,
    sources: Arc<TSources>,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
    numbers: Arc<TNumbers>,
}

impl<TSources, TEventStore, TOutbox, TNumbers>
    IssueInvoiceHandler<TSources, TEventStore, TOutbox, TNumbers>
where
    TSources: BillingSources + 'static,
    TEventStore: EventStore<InvoiceEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
    TNumbers: InvoiceNumberSequence + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        sources: Arc<TSources>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
        numbers: Arc<TNumbers>,
    ) -> Self {
        Self {
            topic: topic.into(),
            sources,
            event_store,
            outbox,
            numbers,
        }
    }

    #[tracing::instrument(
        skip(self, command),
        fields(client = %command.client, period = %command.period)
    )]
    pub async fn handle(&self, command: IssueInvoice) -> Result<InvoiceIssuedV1, ApplicationError> {
        if !is_valid_vat_rate(command.vat_rate) {
            tracing::info!(vat_rate = command.vat_rate, "invoice rejected");
            return Err(ApplicationError::InvalidVatRate(command.vat_rate));
        }

        let stream_id = invoice_stream_id(&command.client, &command.period);
        let (state, version) = load_state(&*self.event_store, &stream_id).await?;

        let computation = load_computation(
            &*self.sources,
            &command.client,
            &command.period,
            command.vat_rate,
        )
        .await?;

        if let Err(reason) = check_issuable(&state, &command, &computation) {
            tracing::info!(%reason, "invoice rejected");
            return Err(ApplicationError::Domain(reason.to_string()));
        }

        let year = BillingPeriod::parse(&command.period)
            .map(|p| p.year())
            .ok_or_else(|| ApplicationError::Domain(DecideError::InvalidPeriod.to_string()))?;
        let invoice_number = self
            .numbers
            .next(year)
            .await
            .map_err(|e| ApplicationError::Numbering(e.to_string()))?;

        match decide_issue(&state, command, invoice_number, computation) {
            Decision::Accepted { events, intents } => {
                self.event_store
                    .append(&stream_id, version, &events)
                    .await
                    .map_err(ApplicationError::VersionConflict)?;
                dispatch_intents(&*self.outbox, &stream_id, version, &self.topic, intents)
                    .await
                    .map_err(ApplicationError::Outbox)?;

                let issued = events.into_iter().next().map(|event| match event {
                    InvoiceEvent::InvoiceIssuedV1(issued) => issued,
                });
                let issued = issued.ok_or_else(|| {
                    ApplicationError::Domain("decision accepted without an event".into())
                })?;
                tracing::info!(
                    invoice_number = %issued.invoice_number,
                    total = issued.total,
                    "invoice issued"
                );
                Ok(issued)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
