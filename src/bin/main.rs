use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use nateflix::config::{self, ConfigLoader, Environment, LogConfig};
use nateflix::server::ServerBuilder;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Nateflix 入口頁面伺服器
#[derive(Debug, Parser)]
#[command(name = "nateflix", version, about)]
struct Args {
    /// 配置目錄，預設讀取 NATEFLIX_CONFIG_DIR 或 `config`
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// 運行環境 (development | production)，預設讀取 NATEFLIX_ENV
    #[arg(long)]
    env: Option<Environment>,

    /// 覆寫監聽地址
    #[arg(long)]
    host: Option<String>,

    /// 覆寫監聽端口
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化配置
    let config_dir = args.config_dir.unwrap_or_else(ConfigLoader::config_dir);
    let env = args.env.unwrap_or_else(Environment::from_env);
    let app_config = config::init_config(&config_dir, env)?;

    // 初始化日誌系統
    init_logging(&app_config.log)?;
    info!("已載入配置: {} ({:?})", config_dir.display(), env);

    let mut server_config = app_config.server.clone();
    if let Some(host) = args.host {
        server_config.host = host;
    }
    if let Some(port) = args.port {
        server_config.port = port;
    }

    let server = ServerBuilder::from_config(app_config)
        .with_server_config(server_config)
        .build()?;

    server.run(shutdown_signal()).await?;
    Ok(())
}

// 等待關閉信號
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!("無法監聽關閉信號: {}", err);
    }
}

// 初始化日誌系統
fn init_logging(log_config: &LogConfig) -> Result<()> {
    // RUST_LOG 優先於配置文件
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_config.level.to_lowercase()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match log_config.format.to_lowercase().as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };
    result.map_err(|e| anyhow!("設置日誌系統失敗: {}", e))?;

    info!("日誌系統初始化完成");
    Ok(())
}
