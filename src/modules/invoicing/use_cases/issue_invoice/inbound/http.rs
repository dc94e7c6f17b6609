use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::invoicing::use_cases::errors::ApplicationError;
use crate::modules::invoicing::use_cases::issue_invoice::command::IssueInvoice;
use crate::modules::invoicing::use_cases::preview_invoice::query::invoice_stream_id;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct IssueInvoiceBody {
    pub client: String,
    pub period: String,
    pub vat_rate: Option<f64>,
}

#[derive(Serialize)]
pub struct IssueInvoiceResponse {
    pub invoice_id: String,
    pub invoice_number: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<IssueInvoiceBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let stream_id = invoice_stream_id(&body.client, &body.period);
    let command = IssueInvoice {
        invoice_id: Uuid::now_v7().to_string(),
        client: body.client,
        period: body.period,
        vat_rate: body.vat_rate.unwrap_or(state.default_vat_rate),
        issued_at: Utc::now().timestamp_millis(),
        issued_by: "user-from-auth".into(),
    };

    match state.issue_handler.handle(command).await {
        Ok(issued) => {
            if let Err(e) = state.project_latest(&stream_id).await {
                tracing::warn!(error = %e, %stream_id, "inline projection failed");
            }
            (
                StatusCode::CREATED,
                Json(IssueInvoiceResponse {
                    invoice_id: issued.invoice_id,
                    invoice_number: issued.invoice_number,
                }),
            )
                .into_response()
        }
        Err(ApplicationError::InvalidVatRate(_)) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::CONFLICT.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
