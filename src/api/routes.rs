use axum::Router;

use crate::api::AppState;

pub mod app;
pub mod portal;
pub mod system;

/// 入口頁面路徑，缺少應用識別碼時重定向到此
pub const PORTAL_PATH: &str = "/portal";

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(portal::routes())
        .merge(app::routes())
        .merge(system::routes())
}
