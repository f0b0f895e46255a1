//! 日誌系統初始化

use thiserror::Error;
use tracing::{info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::LogConfig;

/// 日誌初始化錯誤
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("設置日誌系統失敗: {0}")]
    SetGlobalDefault(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// 將配置中的日誌級別轉換為 tracing Level，未知值為 INFO
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// 安裝全局 tracing subscriber
///
/// 配置的級別作為預設過濾條件，`RUST_LOG` 有設定時優先；重複初始化會返回錯誤。
pub fn init_logging(log_config: &LogConfig) -> Result<(), LoggingError> {
    let level = parse_level(&log_config.level);
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    let builder = FmtSubscriber::builder().with_env_filter(filter);

    match log_config.format.to_lowercase().as_str() {
        "compact" => tracing::subscriber::set_global_default(builder.compact().finish())?,
        _ => tracing::subscriber::set_global_default(builder.pretty().finish())?,
    }

    info!(level = %level, format = %log_config.format, "日誌系統初始化完成");
    Ok(())
}
