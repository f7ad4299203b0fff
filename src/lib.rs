use std::sync::Arc;

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod modules;
pub mod services;

use config::settings::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

/// Builds the full application router with CORS, request tracing and panic recovery.
pub fn app(state: AppState) -> Router {
    let cors = config::cors::layer(&state.settings.cors_origins);

    Router::new()
        .merge(modules::health::routes::routes())
        .merge(modules::chat::routes::routes())
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
