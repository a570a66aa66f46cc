// src/api/rest.rs
use std::path::Path;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, warn};

use super::{routes::api_routes, AppState};
use crate::config::ServerConfig;

/// 組裝完整的應用路由並逐層添加中間件
pub fn build_router(config: &ServerConfig, state: AppState) -> Router {
    let mut app = api_routes().with_state(state);

    // 靜態資源
    let static_dir = Path::new(&config.static_files_dir);
    if static_dir.is_dir() {
        debug!("掛載靜態資源目錄: {}", static_dir.display());
        app = app.nest_service("/static", ServeDir::new(static_dir));
    } else {
        debug!("靜態資源目錄不存在，跳過: {}", static_dir.display());
    }

    // 追蹤層
    app = app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().include_headers(true))
            .on_response(DefaultOnResponse::new().include_headers(true)),
    );

    if config.enable_cors {
        app = app.layer(build_cors_layer(config));
    }

    if config.enable_compression {
        app = app.layer(CompressionLayer::new());
    }

    // 超時設置
    app.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        config.request_timeout(),
    ))
}

fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("忽略無效的CORS來源: {}", origin);
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_methods(vec![Method::GET, Method::HEAD])
        .allow_headers(vec![header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::list(origins))
}
