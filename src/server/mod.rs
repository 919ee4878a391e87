pub mod handlers;

use crate::{config::Config, relay::PredictionRelay, Result};
use axum::{routing::post, Router};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(relay: Arc<PredictionRelay>) -> Router {
    let app_state = handlers::AppState { relay };

    Router::new()
        .route("/", post(handlers::predict))
        .route("/invocations", post(handlers::invoke))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

pub async fn run(config: Config, relay: Arc<PredictionRelay>) -> Result<()> {
    let app = router(relay);

    // Start server
    let addr = SocketAddr::new(
        config.server.host.parse()?,
        config.server.port,
    );

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
