use anyhow::Context;
use std::sync::Arc;
use testing_servers::app;
use testing_servers::config::{self, Config};
use testing_servers::secrets::{self, Secrets};
use testing_servers::state::AppState;

const LISTEN_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("server_v2 starting");

    let config = Config::load(config::DEFAULT_CONFIG_PATH)?;
    config.log_startup();

    // Loaded for availability only; request handling never reads a secret.
    let secrets = Secrets::load(secrets::DEFAULT_SECRETS_PATH)?;
    tracing::info!("Secrets loaded: {} entries", secrets.len());

    let state = AppState {
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR)
        .await
        .with_context(|| format!("failed to listen on '{}'", LISTEN_ADDR))?;
    tracing::info!("Listening on: http://{}", listener.local_addr()?);

    axum::serve(listener, app::v2_router(state)).await?;

    Ok(())
}
