use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use http_body_util::BodyExt;
use nateflix::config::ServerConfig;
use nateflix::first_run::FirstRunGate;
use nateflix::server::ServerBuilder;
use tower::ServiceExt;

/// 以預設伺服器配置建立路由
pub fn test_router(gate: FirstRunGate) -> Router {
    ServerBuilder::new()
        .with_server_config(ServerConfig::default())
        .with_first_run(gate)
        .build()
        .expect("Failed to build test server")
        .router()
}

/// 發送 GET 請求
pub async fn get(router: Router, uri: &str) -> Response<Body> {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// 讀取完整的響應內容
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
