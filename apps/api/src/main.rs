mod config;
mod db;
mod errors;
mod models;
mod pipeline;
mod render;
mod routes;
mod state;
mod store;
mod template;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::render::HttpPdfRenderer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgResumeStore;
use crate::template::ResumeTemplate;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Compile the résumé template. This is a startup precondition: a missing
    // or malformed asset must abort here, never surface as a request error.
    let template = ResumeTemplate::load(&config.template_path)?;
    info!("Resume template compiled from {}", config.template_path);

    // Initialize the PDF renderer client
    let renderer = Arc::new(HttpPdfRenderer::new(config.renderer_url.clone()));
    info!("PDF renderer client initialized ({})", config.renderer_url);

    // Build app state
    let state = AppState {
        store: Arc::new(PgResumeStore::new(db)),
        template,
        renderer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
