use axum::{routing::get, Router};

use crate::api::{handlers::system, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/system/health", get(system::health))
}
