use config::{Config, ConfigError, Environment as EnvSource, File};
use std::env;
use std::path::PathBuf;

/// 選擇配置文件的環境變數
pub const ENV_VAR: &str = "QUANT_ENV";
/// 配置目錄的環境變數，預設為 `config`
pub const CONFIG_DIR_VAR: &str = "CONFIG_DIR";
/// 覆寫配置的環境變數前綴，例如 `QUANT__ANALYTICS__PERIODS_PER_YEAR`
pub const ENV_PREFIX: &str = "QUANT";

/// 執行環境
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// 讀取 `QUANT_ENV`，除 `production` 外一律視為開發環境
    pub fn from_env() -> Self {
        match env::var(ENV_VAR).map(|value| value.to_lowercase()).as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn as_filename(&self) -> &'static str {
        match self {
            Environment::Development => "development.toml",
            Environment::Production => "production.toml",
        }
    }

    /// 此環境的配置文件路徑
    pub fn config_path(&self) -> PathBuf {
        let config_dir = env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| "config".into());
        PathBuf::from(config_dir).join(self.as_filename())
    }
}

/// 組合配置來源：環境配置文件（可不存在），再以 `QUANT__` 環境變數覆寫
pub fn build_sources(env: Environment) -> Result<Config, ConfigError> {
    Config::builder()
        .add_source(File::from(env.config_path()).required(false))
        .add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
}
