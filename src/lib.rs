// 模組定義
pub mod config;
pub mod data_provider;
pub mod domain_types;
pub mod logging;
pub mod stats;
pub mod utils;

pub use domain_types::{Frequency, PriceSeries, PriceTable, StatSeries, TRADING_DAYS};
pub use stats::{
    annualized_return, annualized_volatility, cumulative_return, PerformanceAnalyzer,
    PerformanceSummary, ReturnStats, StatsError, StatsResult,
};
