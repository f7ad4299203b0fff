use axum::{routing::get, Router};

use crate::modules::health::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(controller::root))
}
