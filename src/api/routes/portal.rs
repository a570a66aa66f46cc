use axum::{routing::get, Router};

use super::PORTAL_PATH;
use crate::api::{handlers::portal, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(portal::portal))
        .route(PORTAL_PATH, get(portal::portal))
}
