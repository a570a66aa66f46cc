// first_run.rs - 首次運行狀態
//
// 首次運行記錄在啟動時從配置讀取一次，透過路由狀態注入到頁面處理器，
// 不在請求過程中查詢全局單例。

use crate::config::FirstRunConfig;

/// 首次運行記錄
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstRun {
    /// 應用程序是否尚未完成初始設定
    pub is_first_run: bool,
}

/// 首次運行重定向閘門
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstRunGate {
    enabled: bool,
    first_run: FirstRun,
    setup_path: String,
}

impl FirstRunGate {
    pub fn new(enabled: bool, first_run: FirstRun, setup_path: impl Into<String>) -> Self {
        Self {
            enabled,
            first_run,
            setup_path: setup_path.into(),
        }
    }

    /// 關閉的閘門，永遠不會重定向
    pub fn disabled() -> Self {
        Self::new(false, FirstRun::default(), "/setup")
    }

    pub fn from_config(config: &FirstRunConfig) -> Self {
        Self::new(
            config.enabled,
            FirstRun { is_first_run: config.is_first_run },
            config.setup_path.clone(),
        )
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn first_run(&self) -> FirstRun {
        self.first_run
    }

    /// 需要進入設定流程時返回設定路徑
    pub fn check(&self) -> Option<&str> {
        (self.enabled && self.first_run.is_first_run).then_some(self.setup_path.as_str())
    }
}

impl Default for FirstRunGate {
    fn default() -> Self {
        Self::disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, false, None)]
    #[case(false, true, None)]
    #[case(true, false, None)]
    #[case(true, true, Some("/setup"))]
    fn test_check(#[case] enabled: bool, #[case] is_first_run: bool, #[case] expected: Option<&str>) {
        let gate = FirstRunGate::new(enabled, FirstRun { is_first_run }, "/setup");
        assert_eq!(gate.check(), expected);
    }

    #[test]
    fn test_from_config() {
        let config = FirstRunConfig {
            enabled: true,
            is_first_run: true,
            setup_path: "/welcome".to_string(),
        };
        let gate = FirstRunGate::from_config(&config);

        assert!(gate.is_enabled());
        assert!(gate.first_run().is_first_run);
        assert_eq!(gate.check(), Some("/welcome"));
    }

    #[test]
    fn test_default_is_disabled() {
        let gate = FirstRunGate::default();
        assert!(!gate.is_enabled());
        assert_eq!(gate.check(), None);
    }
}
