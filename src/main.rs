use mindmate::{router, AppState, Config, HistoryStore, SupportClient};
use std::net::SocketAddr;
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let history = HistoryStore::load(config.data_path.clone()).await;
    info!(
        path = %config.data_path.display(),
        entries = history.log().len(),
        "history loaded"
    );

    let client = SupportClient::new(config.support_url.clone())?;
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let state = AppState::new(config, client, history);

    info!(support = %state.client.endpoint(), "listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
