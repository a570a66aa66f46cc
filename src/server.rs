// server.rs - 伺服器核心組件，宣告子模組
//
// 伺服器模組負責 HTTP 服務的構建、綁定與優雅關閉。

/// 伺服器構建器實現
pub mod builder;
/// 伺服器級別錯誤處理
pub mod error;

// 重新導出核心組件，簡化外部使用
pub use crate::config::types::ServerConfig;
pub use builder::{PortalServer, ServerBuilder};
pub use error::{ServerError, ServerResult};
