use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::invoicing::use_cases::issue_invoice::command::IssueInvoice;
use crate::modules::invoicing::use_cases::preview_invoice::query::invoice_stream_id;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlIssuedInvoice {
    pub invoice_id: ID,
    pub invoice_number: String,
    pub total: f64,
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn issue_invoice(
        &self,
        context: &Context<'_>,
        client: String,
        period: String,
        vat_rate: Option<f64>,
    ) -> GqlResult<GqlIssuedInvoice> {
        let state = context.data_unchecked::<AppState>();
        let stream_id = invoice_stream_id(&client, &period);

        let command = IssueInvoice {
            invoice_id: Uuid::now_v7().to_string(),
            client,
            period,
            vat_rate: vat_rate.unwrap_or(state.default_vat_rate),
            issued_at: Utc::now().timestamp_millis(),
            issued_by: "user-from-auth".into(),
        };

        let issued = state
            .issue_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        state
            .project_latest(&stream_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(GqlIssuedInvoice {
            invoice_id: ID(issued.invoice_id),
            invoice_number: issued.invoice_number,
            total: issued.total,
        })
    }
}
