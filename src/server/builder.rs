use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::api::{build_router, AppState};
use crate::config::types::{ApplicationConfig, ServerConfig};
use crate::config::validation::Validator;
use crate::first_run::FirstRunGate;
use crate::server::{ServerError, ServerResult};

/// 伺服器實例
#[derive(Debug)]
pub struct PortalServer {
    config: ServerConfig,
    state: AppState,
}

impl PortalServer {
    /// 伺服器配置
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// 組裝後的路由
    pub fn router(&self) -> Router {
        build_router(&self.config, self.state.clone())
    }

    /// 綁定配置中的地址並運行，直到 `shutdown` 完成
    pub async fn run<F>(self, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        self.serve(listener, shutdown).await
    }

    /// 在已綁定的監聽器上提供服務
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = listener.local_addr()?;
        info!("啟動入口頁面伺服器: http://{}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move {
                shutdown.await;
                info!("收到關閉訊號，等待進行中的請求完成");
            })
            .await?;

        info!("伺服器已關閉");
        Ok(())
    }
}

/// 伺服器構建器
#[derive(Debug, Default)]
pub struct ServerBuilder {
    server_config: Option<ServerConfig>,
    first_run: FirstRunGate,
}

impl ServerBuilder {
    /// 創建新的伺服器構建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 從完整應用程序配置創建構建器
    pub fn from_config(config: &ApplicationConfig) -> Self {
        Self::new()
            .with_server_config(config.server.clone())
            .with_first_run(FirstRunGate::from_config(&config.first_run))
    }

    /// 設置伺服器配置
    pub fn with_server_config(mut self, config: ServerConfig) -> Self {
        self.server_config = Some(config);
        self
    }

    /// 設置首次運行閘門
    pub fn with_first_run(mut self, gate: FirstRunGate) -> Self {
        self.first_run = gate;
        self
    }

    /// 構建並返回伺服器實例
    pub fn build(self) -> ServerResult<PortalServer> {
        let config = self
            .server_config
            .ok_or_else(|| ServerError::Config("未提供伺服器配置".to_string()))?;

        config
            .validate()
            .map_err(|err| ServerError::Config(err.to_string()))?;

        debug!(
            "伺服器實例構建完成: {}:{}，首次運行閘門: {}",
            config.host,
            config.port,
            self.first_run.is_enabled()
        );

        Ok(PortalServer {
            config,
            state: AppState::new(self.first_run),
        })
    }
}
