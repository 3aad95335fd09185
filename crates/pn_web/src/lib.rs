use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/search", get(handlers::search_articles))
        .route("/api/statistics", get(handlers::statistics))
        .route("/api/timeline", get(handlers::timeline))
        .route("/api/overview", get(handlers::overview))
        .route("/api/keywords", get(handlers::keyword_analysis))
        .route("/api/headlines", get(handlers::headlines_by_date))
        .route("/api/article/:id", get(handlers::get_article))
        .route("/api/article/:id/content", get(handlers::get_article_content))
        .route("/api/export/word", get(handlers::export_word))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Binds `bind` and serves until Ctrl+C.
pub async fn serve(state: AppState, bind: &str) -> anyhow::Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(bind).await?;

    info!("🌐 Listening on http://{}", listener.local_addr()?);
    info!("⏹️  Press Ctrl+C to stop the server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
