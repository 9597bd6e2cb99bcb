pub mod request_id;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    export, health, options::OptionsController, script::ScriptController,
};
use crate::domain::script::ScriptService;
use crate::infrastructure::config::Config;

/// Build the application router with all routes and layers
pub fn create_router(
    script_service: Arc<ScriptService>,
    options_controller: Arc<OptionsController>,
    script_controller: Arc<ScriptController>,
) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(script_service);

    // Form catalogue
    let options_routes = Router::new()
        .route("/api/options", get(OptionsController::get_options))
        .route(
            "/api/options/languages/:languageId",
            get(OptionsController::get_language),
        )
        .with_state(options_controller);

    // Generation and downloads
    let script_routes = Router::new()
        .route("/api/scripts", post(ScriptController::generate))
        .route("/api/scripts/:scriptId", get(ScriptController::get_script))
        .route(
            "/api/scripts/:scriptId/download",
            get(ScriptController::download),
        )
        .with_state(script_controller);

    let export_routes = Router::new().route("/api/exports", post(export::export));

    Router::new()
        .merge(health_routes)
        .merge(options_routes)
        .merge(script_routes)
        .merge(export_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(CorsLayer::permissive()),
        )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
