use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::invoicing::use_cases::errors::ApplicationError;
use crate::modules::invoicing::use_cases::preview_invoice::query::PreviewInvoice;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PreviewInvoiceBody {
    pub client: String,
    pub period: String,
    pub vat_rate: Option<f64>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<PreviewInvoiceBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let query = PreviewInvoice {
        client: body.client,
        period: body.period,
        vat_rate: body.vat_rate.unwrap_or(state.default_vat_rate),
    };

    match state.preview_handler.handle(query).await {
        Ok(preview) => Json(preview).into_response(),
        Err(ApplicationError::InvalidVatRate(_)) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
