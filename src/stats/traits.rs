//! 序列與價格表共用的統計介面

use tracing::debug;

use super::error::StatsResult;
use super::returns;
use crate::domain_types::{PriceSeries, PriceTable, StatSeries, TRADING_DAYS};

/// 報酬與波動率統計
///
/// 單一序列輸出純量，價格表則對每個欄位獨立計算並輸出 [`StatSeries`]。
pub trait ReturnStats {
    type Output;

    /// 累積報酬，1.0 == 100%
    fn cumulative_return(&self) -> StatsResult<Self::Output>;

    /// 年化報酬
    fn annualized_return(&self, periods_per_year: f64) -> StatsResult<Self::Output>;

    /// 年化波動率
    fn annualized_volatility(&self, periods_per_year: f64) -> StatsResult<Self::Output>;

    /// 以每年 252 個交易日計算年化報酬
    fn annualized_return_daily(&self) -> StatsResult<Self::Output> {
        self.annualized_return(TRADING_DAYS)
    }

    /// 以每年 252 個交易日計算年化波動率
    fn annualized_volatility_daily(&self) -> StatsResult<Self::Output> {
        self.annualized_volatility(TRADING_DAYS)
    }
}

impl ReturnStats for [f64] {
    type Output = f64;

    fn cumulative_return(&self) -> StatsResult<f64> {
        returns::cumulative_return(self)
    }

    fn annualized_return(&self, periods_per_year: f64) -> StatsResult<f64> {
        returns::annualized_return(self, periods_per_year)
    }

    fn annualized_volatility(&self, periods_per_year: f64) -> StatsResult<f64> {
        returns::annualized_volatility(self, periods_per_year)
    }
}

impl ReturnStats for PriceSeries {
    type Output = f64;

    fn cumulative_return(&self) -> StatsResult<f64> {
        returns::cumulative_return(self.prices())
    }

    fn annualized_return(&self, periods_per_year: f64) -> StatsResult<f64> {
        returns::annualized_return(self.prices(), periods_per_year)
    }

    fn annualized_volatility(&self, periods_per_year: f64) -> StatsResult<f64> {
        returns::annualized_volatility(self.prices(), periods_per_year)
    }
}

impl PriceTable {
    /// 對每個欄位套用同一個計算
    fn per_column<F>(&self, stat_name: &str, compute: F) -> StatsResult<StatSeries>
    where
        F: Fn(&[f64]) -> StatsResult<f64>,
    {
        let mut stats = StatSeries::new(stat_name);

        for instrument in self.instruments() {
            let prices = self.column_values(&instrument)?;
            let value = compute(&prices)?;
            debug!(instrument = %instrument, stat = stat_name, value, "欄位統計完成");
            stats.push(instrument, value);
        }

        Ok(stats)
    }
}

impl ReturnStats for PriceTable {
    type Output = StatSeries;

    fn cumulative_return(&self) -> StatsResult<StatSeries> {
        self.per_column("cumulative_return", returns::cumulative_return)
    }

    fn annualized_return(&self, periods_per_year: f64) -> StatsResult<StatSeries> {
        self.per_column("return", |prices| {
            returns::annualized_return(prices, periods_per_year)
        })
    }

    fn annualized_volatility(&self, periods_per_year: f64) -> StatsResult<StatSeries> {
        self.per_column("volatility", |prices| {
            returns::annualized_volatility(prices, periods_per_year)
        })
    }
}
