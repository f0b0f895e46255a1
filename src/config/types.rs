use serde::{Deserialize, Serialize};

use crate::config::validation::{ValidationError, ValidationUtils, Validator};
use crate::domain_types::Frequency;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const LOG_FORMATS: [&str; 2] = ["pretty", "compact"];

/// 應用程序配置結構
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuantConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl Validator for QuantConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        self.log.validate()?;
        self.analytics.validate()?;

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
        ValidationUtils::one_of(&self.level.to_lowercase().as_str(), &LOG_LEVELS, "log.level")?;
        ValidationUtils::one_of(&self.format.to_lowercase().as_str(), &LOG_FORMATS, "log.format")?;

        Ok(())
    }
}

/// 分析配置
///
/// `periods_per_year` 有值時優先，否則由 `frequency` 推得。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub periods_per_year: Option<f64>,
    #[serde(default)]
    pub frequency: Frequency,
}

impl AnalyticsConfig {
    /// 實際使用的年化週期數
    pub fn effective_periods_per_year(&self) -> f64 {
        self.periods_per_year
            .unwrap_or_else(|| self.frequency.periods_per_year())
    }
}

impl Validator for AnalyticsConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(periods) = self.periods_per_year {
            ValidationUtils::positive_finite(periods, "analytics.periods_per_year")?;
        }

        Ok(())
    }
}
