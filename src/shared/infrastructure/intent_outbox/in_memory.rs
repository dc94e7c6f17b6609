use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::HashSet;
use tokio::sync::Mutex;

/// Outbox that keeps rows in memory and rejects a second row for the same
/// (stream, version).
#[derive(Default)]
pub struct InMemoryDomainOutbox {
    pub rows: Mutex<Vec<OutboxRow>>,
    seen: Mutex<HashSet<(String, i64)>>,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        if row.topic.is_empty() {
            return Err(OutboxError::Validation("topic must not be empty".into()));
        }
        let key = (row.stream_id.clone(), row.stream_version);
        {
            let mut seen = self.seen.lock().await;
            if !seen.insert(key) {
                return Err(OutboxError::Duplicate {
                    stream_id: row.stream_id,
                    stream_version: row.stream_version,
                });
            }
        }
        tracing::debug!(
            topic = %row.topic,
            event_type = %row.event_type,
            stream_id = %row.stream_id,
            stream_version = row.stream_version,
            "outbox row enqueued"
        );
        self.rows.lock().await.push(row);
        Ok(())
    }
}
