pub mod handlers;
pub mod types;

use crate::{Result, config::Config, model::HttpQaModel, model::QaModel};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::root))
        .route("/chat", post(handlers::chat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Construct the inference handle once; requests only read it.
    let model: Option<Arc<dyn QaModel>> = match config.model {
        Some(model_config) => {
            info!("Using inference backend at {}", model_config.base_url);
            Some(Arc::new(HttpQaModel::new(model_config)?))
        }
        None => {
            warn!("No model configured; /chat will answer 503");
            None
        }
    };

    let app = router(handlers::AppState { model });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
