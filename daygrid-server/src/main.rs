mod routes;
mod singleton;
mod state;

use anyhow::Result;
use axum::Router;
use daygrid_core::config::DaygridConfig;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DaygridConfig::load()?;

    // Ensure only one instance writes to the data directory
    let _lock = singleton::acquire_lock(&config.data_path())?;

    let state = AppState::load(&config)?;
    info!(events = %config.events_path().display(), "loaded event store");

    let app = app(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.server_port));
    info!("daygrid-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::events::router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
