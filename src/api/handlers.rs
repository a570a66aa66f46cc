/// 應用詳情頁面
pub mod app;
/// 入口頁面
pub mod portal;
/// 系統狀態
pub mod system;
