use axum::{routing::get, Router};

use crate::api::{handlers::app, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/app", get(app::app_index))
        .route("/app/", get(app::app_index))
        .route("/app/{app}", get(app::app))
}
