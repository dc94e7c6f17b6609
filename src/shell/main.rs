use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::{EnvFilter, fmt};

use invoicing::modules::invoicing::adapters::outbound::billing_sources_in_memory::{
    BillingRecords, InMemoryBillingSources,
};
use invoicing::shell::config::AppConfig;
use invoicing::shell::http::router;
use invoicing::shell::seed::load_billing_records;
use invoicing::shell::state::{AppState, InvoiceEventStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let records = match &config.seed_path {
        Some(path) => load_billing_records(path).await?,
        None => {
            tracing::warn!("INVOICING_SEED_PATH not set, starting without billing records");
            BillingRecords::default()
        }
    };

    let state = AppState::in_memory(
        &config.topic,
        config.default_vat_rate,
        Arc::new(InMemoryBillingSources::with_records(records)),
        Arc::new(InvoiceEventStore::new()),
    );

    let app = router(state);

    tracing::info!(addr = %config.bind_addr, "HTTP endpoint");
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
