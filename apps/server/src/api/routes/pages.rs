//! Server-rendered page routes

use crate::api::handlers::{home, partners};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/partners", get(partners::partners))
}
