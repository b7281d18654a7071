//! Vault asset router — REST server binary.
//!
//! Maps free-text brand-asset requests onto structured Vault DAM queries,
//! with model-assisted parsing when an API key is configured and
//! deterministic pattern matching otherwise.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use vault_api::config::ApiConfig;
use vault_api::routes;
use vault_api::state::AppState;
use vault_intent::ModelConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "vault-api starting");

    let config = ApiConfig::from_env();

    let state = if let Some(model_config) = ModelConfig::from_env() {
        tracing::info!(model = %model_config.model, "model-assisted parsing enabled");
        AppState::with_model(model_config)
    } else {
        tracing::warn!("no model API key configured — pattern matching only");
        AppState::new()
    };

    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
