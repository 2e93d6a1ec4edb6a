use dotenvy::dotenv;
use pos_admin::config::get_configuration;
use pos_admin::services::{ApiClient, ShopClient};
use pos_admin::startup::build_router;
use pos_admin::AppState;
use service_core::observability::init_tracing;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    // Initialize tracing using shared logic
    init_tracing(
        "pos-admin",
        &configuration.telemetry.log_level,
        configuration.telemetry.otlp_endpoint.as_deref(),
    );

    pos_admin::services::metrics::init_metrics();

    let api_client = Arc::new(ApiClient::new(configuration.api.clone())?);
    let shops = Arc::new(ShopClient::new(api_client.clone()));
    let state = AppState::new(api_client, shops, configuration.onboarding.clone());

    let app = build_router(state, configuration.server.secure_cookies);

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!(
        api_url = %configuration.api.url,
        "Starting pos-admin on {}", address
    );
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
