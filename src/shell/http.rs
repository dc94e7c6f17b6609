use axum::{
    Extension, Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::invoicing::use_cases::issue_invoice::inbound::http as issue_http;
use crate::modules::invoicing::use_cases::list_invoices_by_client::inbound::http as list_http;
use crate::modules::invoicing::use_cases::preview_invoice::inbound::http as preview_http;
use crate::shell::graphql::{self, AppSchema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema: AppSchema = graphql::schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route("/preview-invoice", post(preview_http::handle))
        .route("/issue-invoice", post(issue_http::handle))
        .route("/list-invoices", get(list_http::handle))
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
