//! 報酬與波動率的基本公式
//!
//! 所有函數都是無狀態的純計算，輸入為依時間排序的價格。
//! `N` 個價格只有 `N - 1` 個報酬區間，年化時以區間數為基準。

use statrs::statistics::Statistics;
use tracing::trace;

use super::error::{StatsError, StatsResult};

/// 驗證價格數量與數值
fn validate_prices(prices: &[f64], required: usize) -> StatsResult<()> {
    if prices.len() < required {
        return Err(StatsError::InsufficientData {
            required,
            actual: prices.len(),
        });
    }

    if let Some((index, &value)) = prices
        .iter()
        .enumerate()
        .find(|(_, price)| !(price.is_finite() && **price > 0.0))
    {
        return Err(StatsError::InvalidPrice { index, value });
    }

    Ok(())
}

fn validate_periodicity(periods_per_year: f64) -> StatsResult<()> {
    if periods_per_year.is_finite() && periods_per_year > 0.0 {
        Ok(())
    } else {
        Err(StatsError::InvalidPeriodicity(periods_per_year))
    }
}

/// 逐期百分比變化 `price[i] / price[i-1] - 1`，長度為 `N - 1`
pub fn pct_change(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|pair| pair[1] / pair[0] - 1.0).collect()
}

/// 累積報酬 `last / first - 1`，1.0 == 100%
///
/// 單一觀測點時首尾相同，結果為 0.0。
pub fn cumulative_return(prices: &[f64]) -> StatsResult<f64> {
    validate_prices(prices, 1)?;

    let first = prices[0];
    let last = prices[prices.len() - 1];

    Ok(last / first - 1.0)
}

/// 年化報酬 `(last / first) ^ (periods_per_year / (N - 1)) - 1`
///
/// 例如要計算 252 個交易日的一年報酬，需要包含前一年最後一天共 253 個價格。
pub fn annualized_return(prices: &[f64], periods_per_year: f64) -> StatsResult<f64> {
    validate_prices(prices, 2)?;
    validate_periodicity(periods_per_year)?;

    let intervals = (prices.len() - 1) as f64;
    let growth = prices[prices.len() - 1] / prices[0];
    let exponent = periods_per_year / intervals;

    trace!(intervals, growth, exponent, "年化報酬");

    Ok(growth.powf(exponent) - 1.0)
}

/// 年化波動率：逐期百分比變化的樣本標準差乘以 `sqrt(periods_per_year)`
///
/// 樣本標準差至少需要兩個變化值，所以至少要三個價格。
pub fn annualized_volatility(prices: &[f64], periods_per_year: f64) -> StatsResult<f64> {
    validate_prices(prices, 3)?;
    validate_periodicity(periods_per_year)?;

    let changes = pct_change(prices);
    let std_dev = changes.iter().std_dev();

    trace!(changes = changes.len(), std_dev, "年化波動率");

    Ok(std_dev * periods_per_year.sqrt())
}
