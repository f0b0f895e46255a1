//! 領域類型錯誤定義

use thiserror::Error;

/// 價格序列與價格表的建構錯誤
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("長度不一致: {instrument} 有 {timestamps} 個時間戳, {prices} 個價格")]
    LengthMismatch {
        instrument: String,
        timestamps: usize,
        prices: usize,
    },

    #[error("時間戳未嚴格遞增: {instrument} 在位置 {index}")]
    NonIncreasingTimestamps { instrument: String, index: usize },

    #[error("序列未對齊: {0} 的時間戳與價格表索引不同")]
    MisalignedSeries(String),

    #[error("重複的商品代碼: {0}")]
    DuplicateInstrument(String),

    #[error("找不到商品代碼: {0}")]
    UnknownInstrument(String),

    #[error("缺少必要欄位: {0}")]
    MissingColumn(String),

    #[error("缺失值: {instrument} 在位置 {index}")]
    MissingValue { instrument: String, index: usize },

    #[error("無效的時間戳: {0}")]
    InvalidTimestamp(i64),

    #[error("Polars 錯誤: {0}")]
    PolarsError(#[from] polars::error::PolarsError),
}

/// 領域類型結果類型
pub type DomainResult<T> = Result<T, DomainError>;
