use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod codes;
mod config;
mod error;
mod handlers;
mod models;
mod store;


use store::UrlStore;

// ── Shared application state ───────────────────────────────────────────────

pub struct AppState {
    pub config: config::AppConfig,
    pub store: UrlStore,
}

// ── Router ─────────────────────────────────────────────────────────────────

/// Build the application router. Split out of main so tests can drive the
/// exact production routes in-memory.
fn app(state: Arc<AppState>) -> Router {
    let inspect_enabled = state.config.inspect_enabled;

    let mut router = Router::new()
        .route("/", get(handlers::root))
        .route("/shorten", post(handlers::shorten::shorten))
        .route("/redirect/:code", get(handlers::redirect::redirect));

    // Mounted only when enabled; otherwise the path does not exist at all.
    if inspect_enabled {
        router = router.route("/db", get(handlers::inspect::dump));
    }

    router.with_state(state).layer(TraceLayer::new_for_http())
}

// ── Entry point ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (ignore error if file is absent — env vars may already be set)
    dotenvy::dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hoplink=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = config::AppConfig::from_env()?;
    tracing::info!("Starting hoplink on {}:{}", config.host, config.port);
    tracing::info!("Base URL: {}", config.base_url);
    if config.inspect_enabled {
        tracing::warn!("Inspection route /db is enabled (development use only)");
    }

    let bind_addr = format!("{}:{}", config.host, config.port);

    // Build shared state
    let state = Arc::new(AppState {
        config,
        store: UrlStore::new(),
    });

    let router = app(state);

    // ── Serve ──────────────────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
