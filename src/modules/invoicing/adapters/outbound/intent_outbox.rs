use crate::modules::invoicing::core::intents::InvoiceIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

/// Translate a list of domain intents into outbox rows and enqueue them.
/// `starting_version` is the event store stream version before the append.
/// Each intent corresponds to one new version: starting_version + index + 1.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    intents: Vec<InvoiceIntent>,
) -> Result<(), OutboxError> {
    for (i, intent) in intents.into_iter().enumerate() {
        let stream_version = starting_version + i as i64 + 1;
        match intent {
            InvoiceIntent::PublishInvoiceIssued { payload } => {
                let occurred_at = payload.issued_at;
                let payload = serde_json::to_value(payload)
                    .map_err(|e| OutboxError::Validation(e.to_string()))?;
                outbox
                    .enqueue(OutboxRow {
                        topic: topic.to_string(),
                        event_type: "InvoiceIssued".to_string(),
                        event_version: 1,
                        stream_id: stream_id.to_string(),
                        stream_version,
                        occurred_at,
                        payload,
                    })
                    .await?;
            }
        }
    }
    Ok(())
}
