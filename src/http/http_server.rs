use crate::{
    config::AppConfig,
    http::routes::create_routes,
    state::AppState,
    storage::FileBackend,
    store::MarketStore,
};
use anyhow::Result;
use std::sync::Arc;
use tokio::{net::TcpListener, sync::watch, task::JoinHandle};
use tracing::info;

pub async fn start_http_server(
    config: AppConfig,
    shutdown_rx: watch::Receiver<()>,
) -> Result<JoinHandle<Result<()>>> {
    let http_addr = format!("{}:{}", config.http.address, config.http.port);
    let listener = tokio::net::TcpListener::bind(http_addr.clone()).await?;
    info!("🚀 Starting CoreTrades local store on {:?}", http_addr);

    let backend = FileBackend::open(&config.storage.data_dir)?;
    let store = MarketStore::open(Box::new(backend))?;
    info!(
        "✅ marketplace collections loaded from {}",
        config.storage.data_dir
    );

    let app_state = AppState {
        config: Arc::new(config),
        store: Arc::new(tokio::sync::Mutex::new(store)),
    };

    let http_server = tokio::spawn(run_http_server(listener, shutdown_rx, app_state));

    Ok(http_server)
}

pub async fn run_http_server(
    listener: TcpListener,
    mut shutdown_rx: watch::Receiver<()>,
    app_state: AppState,
) -> Result<()> {
    let app = create_routes(app_state);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async move {
            shutdown_rx.changed().await.ok();
            tracing::info!("🚦 Gracefully shutting down all connections, ");
        })
        .await?;

    Ok(())
}
