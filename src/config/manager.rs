use config::ConfigError;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::config::loader::{build_sources, Environment};
use crate::config::types::QuantConfig;
use crate::config::validation::Validator;

// 全局配置實例
static CONFIG: OnceCell<QuantConfig> = OnceCell::new();

/// 獲取全局配置，尚未初始化時從環境加載，加載失敗則使用預設值
pub fn get_config() -> &'static QuantConfig {
    CONFIG.get_or_init(|| {
        QuantConfig::load_from_env().unwrap_or_else(|err| {
            warn!("無法加載配置，使用預設值: {}", err);
            QuantConfig::default()
        })
    })
}

/// 初始化配置（在應用程序啟動時調用）
pub fn init_config() -> Result<&'static QuantConfig, ConfigError> {
    let quant_config = QuantConfig::load_from_env()?;

    if CONFIG.set(quant_config).is_err() {
        warn!("配置已經被初始化，跳過重複初始化");
    } else {
        debug!("配置初始化成功，環境：{:?}", Environment::from_env());
    }

    Ok(get_config())
}

impl QuantConfig {
    /// 從環境變數指定的環境加載配置
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let env = Environment::from_env();
        debug!("從環境加載配置: {:?}", env);
        Self::load(env)
    }

    /// 從指定環境加載並驗證配置
    pub fn load(env: Environment) -> Result<Self, ConfigError> {
        let config_source = build_sources(env)?;
        let quant_config: QuantConfig = config_source.try_deserialize()?;

        quant_config
            .validate()
            .map_err(|err| ConfigError::Message(err.to_string()))?;
        debug!("配置驗證通過");

        Ok(quant_config)
    }
}
