use std::sync::Arc;

use crate::first_run::FirstRunGate;

/// 所有處理器共享的只讀狀態
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub first_run: Arc<FirstRunGate>,
}

impl AppState {
    pub fn new(first_run: FirstRunGate) -> Self {
        Self {
            first_run: Arc::new(first_run),
        }
    }
}
