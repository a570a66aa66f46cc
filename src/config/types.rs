use serde::{Serialize, Deserialize};
use std::time::Duration;
use crate::config::validation::{ValidationError, ValidationUtils, Validator};

/// 應用程序配置結構
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub first_run: FirstRunConfig,
}

impl Validator for ApplicationConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證各個部分的配置
        self.log.validate()?;
        self.server.validate()?;
        self.first_run.validate()?;

        Ok(())
    }
}

/// 日誌配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Validator for LogConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證日誌級別
        ValidationUtils::one_of(
            &self.level.to_lowercase().as_str(),
            &["trace", "debug", "info", "warn", "error"],
            "log.level",
        )?;

        // 驗證日誌格式
        ValidationUtils::one_of(
            &self.format.to_lowercase().as_str(),
            &["pretty", "json"],
            "log.format",
        )?;

        Ok(())
    }
}

/// 伺服器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 請求超時（秒）
    pub request_timeout: u64,
    pub enable_compression: bool,
    pub enable_cors: bool,
    pub cors_allowed_origins: Vec<String>,
    /// 靜態資源目錄，掛載於 `/static`
    pub static_files_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            request_timeout: 30,
            enable_compression: true,
            enable_cors: false,
            cors_allowed_origins: Vec::new(),
            static_files_dir: "static".to_string(),
        }
    }
}

impl ServerConfig {
    /// 請求超時持續時間
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Validator for ServerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證服務器配置
        ValidationUtils::not_empty(&self.host, "server.host")?;
        ValidationUtils::in_range(self.port, 1, 65535, "server.port")?;
        ValidationUtils::in_range(self.request_timeout, 1, 3600, "server.request_timeout")?;

        // CORS設定驗證
        if self.enable_cors && self.cors_allowed_origins.is_empty() {
            return Err(ValidationError::InvalidValue(
                "啟用CORS但未指定允許的來源".to_string()
            ));
        }
        if self.cors_allowed_origins.iter().any(|origin| origin.trim() == "*") {
            return Err(ValidationError::InvalidValue(
                "server.cors_allowed_origins 不支援萬用字元 '*'".to_string()
            ));
        }

        Ok(())
    }
}

/// 首次運行配置
///
/// `enabled` 預設關閉，此時頁面處理器不會檢查首次運行狀態。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirstRunConfig {
    /// 是否啟用首次運行重定向
    pub enabled: bool,
    /// 應用程序是否尚未完成初始設定
    pub is_first_run: bool,
    /// 設定流程的路徑
    pub setup_path: String,
}

impl Default for FirstRunConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            is_first_run: false,
            setup_path: "/setup".to_string(),
        }
    }
}

impl Validator for FirstRunConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationUtils::check_dependency(
            self.enabled,
            !self.setup_path.trim().is_empty(),
            "first_run.enabled",
            "first_run.setup_path",
        )?;

        if self.enabled && !self.setup_path.starts_with('/') {
            return Err(ValidationError::InvalidValue(format!(
                "first_run.setup_path 必須以 '/' 開頭: {}",
                self.setup_path
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config_is_valid() {
        let config = ApplicationConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.first_run.enabled);
        assert_eq!(config.server.request_timeout(), Duration::from_secs(30));
    }

    #[rstest]
    #[case("verbose", "pretty")]
    #[case("info", "xml")]
    fn test_log_config_rejects(#[case] level: &str, #[case] format: &str) {
        let log = LogConfig {
            level: level.to_string(),
            format: format.to_string(),
        };
        assert!(log.validate().is_err());
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let log = LogConfig {
            level: "DEBUG".to_string(),
            format: "Json".to_string(),
        };
        assert!(log.validate().is_ok());
    }

    #[test]
    fn test_server_config_rejects_port_zero() {
        let server = ServerConfig { port: 0, ..ServerConfig::default() };
        assert!(matches!(server.validate(), Err(ValidationError::RangeError { .. })));
    }

    #[test]
    fn test_server_config_cors_requires_origins() {
        let mut server = ServerConfig { enable_cors: true, ..ServerConfig::default() };
        assert!(server.validate().is_err());

        server.cors_allowed_origins = vec!["http://localhost:3000".to_string()];
        assert!(server.validate().is_ok());

        server.cors_allowed_origins.push("*".to_string());
        assert!(server.validate().is_err());
    }

    #[test]
    fn test_first_run_requires_setup_path_when_enabled() {
        let mut first_run = FirstRunConfig {
            enabled: true,
            setup_path: "  ".to_string(),
            ..FirstRunConfig::default()
        };
        assert!(matches!(
            first_run.validate(),
            Err(ValidationError::DependencyError { .. })
        ));

        first_run.setup_path = "setup".to_string();
        assert!(matches!(first_run.validate(), Err(ValidationError::InvalidValue(_))));

        // 關閉時不檢查路徑
        first_run.enabled = false;
        assert!(first_run.validate().is_ok());
    }
}
