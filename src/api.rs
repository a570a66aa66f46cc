// api.rs - HTTP 介面模組，宣告子模組
//
// 提供入口頁面與應用詳情頁面的伺服器端渲染，以及系統健康檢查。

/// 路由組裝與中間件
pub mod rest;
/// 路由定義
pub mod routes;
/// 請求處理器
pub mod handlers;
/// 頁面結果與渲染錯誤
pub mod page;
/// 路由共享狀態
pub mod state;

pub use page::{Page, PageError};
pub use rest::build_router;
pub use state::AppState;
