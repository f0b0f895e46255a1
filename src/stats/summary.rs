//! 績效摘要

use serde::Serialize;
use tracing::{debug, info};

use super::error::{StatsError, StatsResult};
use super::returns;
use crate::config::AnalyticsConfig;
use crate::domain_types::{PriceSeries, PriceTable, TRADING_DAYS};

/// 單一商品的績效摘要
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub instrument: String,
    pub observations: usize,
    pub cumulative_return: f64,
    pub annualized_return: f64,
    pub annualized_volatility: f64,
}

/// 以固定年化週期數計算績效摘要
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceAnalyzer {
    periods_per_year: f64,
}

impl Default for PerformanceAnalyzer {
    fn default() -> Self {
        Self {
            periods_per_year: TRADING_DAYS,
        }
    }
}

impl PerformanceAnalyzer {
    pub fn new(periods_per_year: f64) -> StatsResult<Self> {
        if !(periods_per_year.is_finite() && periods_per_year > 0.0) {
            return Err(StatsError::InvalidPeriodicity(periods_per_year));
        }
        Ok(Self { periods_per_year })
    }

    /// 由分析配置創建
    pub fn from_config(config: &AnalyticsConfig) -> StatsResult<Self> {
        Self::new(config.effective_periods_per_year())
    }

    pub fn periods_per_year(&self) -> f64 {
        self.periods_per_year
    }

    fn summarize_prices(&self, instrument: &str, prices: &[f64]) -> StatsResult<PerformanceSummary> {
        let summary = PerformanceSummary {
            instrument: instrument.to_string(),
            observations: prices.len(),
            cumulative_return: returns::cumulative_return(prices)?,
            annualized_return: returns::annualized_return(prices, self.periods_per_year)?,
            annualized_volatility: returns::annualized_volatility(prices, self.periods_per_year)?,
        };

        debug!(
            instrument,
            observations = summary.observations,
            cumulative_return = summary.cumulative_return,
            annualized_return = summary.annualized_return,
            annualized_volatility = summary.annualized_volatility,
            "績效摘要"
        );

        Ok(summary)
    }

    /// 單一序列的績效摘要
    pub fn summarize_series(&self, series: &PriceSeries) -> StatsResult<PerformanceSummary> {
        self.summarize_prices(series.name(), series.prices())
    }

    /// 價格表每個商品的績效摘要，依欄位順序
    pub fn summarize_table(&self, table: &PriceTable) -> StatsResult<Vec<PerformanceSummary>> {
        let instruments = table.instruments();
        info!(
            instruments = instruments.len(),
            observations = table.len(),
            periods_per_year = self.periods_per_year,
            "計算價格表績效摘要"
        );

        instruments
            .iter()
            .map(|instrument| {
                let prices = table.column_values(instrument)?;
                self.summarize_prices(instrument, &prices)
            })
            .collect()
    }
}
