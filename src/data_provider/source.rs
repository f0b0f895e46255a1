use chrono::NaiveDate;
use thiserror::Error;

use crate::domain_types::{DomainError, PriceSeries, PriceTable};

/// 數據來源錯誤
#[derive(Error, Debug)]
pub enum DataError {
    #[error("未指定任何商品代碼")]
    NoTickers,

    #[error("找不到商品或序列: {0}")]
    UnknownInstrument(String),

    #[error("數據格式錯誤: {0}")]
    Domain(#[from] DomainError),
}

/// 數據來源結果類型
pub type DataResult<T> = Result<T, DataError>;

/// 市場價格來源
///
/// 返回調整後收盤價，欄位順序與請求的商品代碼一致，索引為無時區的日線時間。
/// 單一商品時返回以該代碼命名的單欄價格表。
pub trait PriceTableSource: Send + Sync {
    fn fetch_prices(&self, tickers: &[&str], start: Option<NaiveDate>) -> DataResult<PriceTable>;
}

/// 遠端時間序列來源
///
/// 返回已移除缺失值與佔位值的單一數值序列。
pub trait SeriesSource: Send + Sync {
    fn fetch_series(&self, name: &str) -> DataResult<PriceSeries>;
}
