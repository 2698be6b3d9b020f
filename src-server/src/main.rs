use std::net::SocketAddr;
use std::sync::Arc;

use goalfolio_server::main_lib;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("goalfolio_server=debug,tower_http=info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8484);

    let state = Arc::new(main_lib::AppState::new());
    let app = main_lib::build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("goalfolio server listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
