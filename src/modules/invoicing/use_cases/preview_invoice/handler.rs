use crate::modules::invoicing::core::aggregate::compute_invoice;
use crate::modules::invoicing::core::billing::{InvoiceComputation, is_valid_vat_rate};
use crate::modules::invoicing::core::events::InvoiceEvent;
use crate::modules::invoicing::core::evolve::evolve;
use crate::modules::invoicing::core::period::BillingPeriod;
use crate::modules::invoicing::core::state::InvoiceState;
use crate::modules::invoicing::use_cases::errors::ApplicationError;
use crate::modules::invoicing::use_cases::preview_invoice::query::{
    InvoicePreview, PreviewInvoice, invoice_stream_id,
};
use crate::modules::invoicing::use_cases::preview_invoice::sources_port::BillingSources;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

/// Fetches the billing inputs and runs the aggregation. Nothing is fetched
/// when there is no client or the period is malformed.
pub(crate) async fn load_computation<TSources>(
    sources: &TSources,
    client: &str,
    period: &str,
    vat_rate: f64,
) -> Result<InvoiceComputation, ApplicationError>
where
    TSources: BillingSources + ?Sized,
{
    if client.is_empty() || BillingPeriod::parse(period).is_none() {
        return Ok(InvoiceComputation::empty());
    }

    let sources_error = |e: anyhow::Error| ApplicationError::Sources(e.to_string());
    let time_entries = sources.time_entries(period).await.map_err(sources_error)?;
    let projects = sources.projects().await.map_err(sources_error)?;
    let rates = sources.rates().await.map_err(sources_error)?;

    Ok(compute_invoice(
        client,
        period,
        &time_entries,
        &projects,
        &rates,
        vat_rate,
    ))
}

/// Replays the invoice stream. Returns the state and the stream version.
pub(crate) async fn load_state<TEventStore>(
    event_store: &TEventStore,
    stream_id: &str,
) -> Result<(InvoiceState, i64), ApplicationError>
where
    TEventStore: EventStore<InvoiceEvent> + ?Sized,
{
    let stream = event_store.load(stream_id).await?;
    let state = stream.events.into_iter().fold(InvoiceState::None, evolve);
    Ok((state, stream.version))
}

pub struct PreviewInvoiceHandler<TSources, TEventStore>
where
    TSources: BillingSources + 'static,
    TEventStore: EventStore<InvoiceEvent> + 'static,
{
    sources: Arc<TSources>,
    event_store: Arc<TEventStore>,
}

impl<TSources, TEventStore> PreviewInvoiceHandler<TSources, TEventStore>
where
    TSources: BillingSources + 'static,
    TEventStore: EventStore<InvoiceEvent> + 'static,
{
    pub fn new(sources: Arc<TSources>, event_store: Arc<TEventStore>) -> Self {
        Self {
            sources,
            event_store,
        }
    }

    #[tracing::instrument(skip(self), fields(client = %query.client, period = %query.period))]
    pub async fn handle(&self, query: PreviewInvoice) -> Result<InvoicePreview, ApplicationError> {
        if !is_valid_vat_rate(query.vat_rate) {
            return Err(ApplicationError::InvalidVatRate(query.vat_rate));
        }

        let computation =
            load_computation(&*self.sources, &query.client, &query.period, query.vat_rate).await?;

        let issued_invoice_number = if query.client.is_empty()
            || BillingPeriod::parse(&query.period).is_none()
        {
            None
        } else {
            let stream_id = invoice_stream_id(&query.client, &query.period);
            let (state, _) = load_state(&*self.event_store, &stream_id).await?;
            state.issued_invoice_number().map(str::to_string)
        };

        if !computation.missing_rates.is_empty() {
            tracing::warn!(
                missing = computation.missing_rates.len(),
                "preview contains lines without a rate"
            );
        }
        tracing::info!(
            lines = computation.lines.len(),
            total = computation.total,
            "invoice previewed"
        );

        Ok(InvoicePreview {
            client: query.client,
            period: query.period,
            vat_rate: query.vat_rate,
            computation,
            issued_invoice_number,
        })
    }
}
