//! 統計計算錯誤定義

use thiserror::Error;

use crate::domain_types::DomainError;

/// 報酬與波動率計算錯誤
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("數據不足: 至少需要 {required} 個觀測點, 實際 {actual} 個")]
    InsufficientData { required: usize, actual: usize },

    #[error("無效的價格: 位置 {index} 的值 {value} 必須是正的有限數")]
    InvalidPrice { index: usize, value: f64 },

    #[error("無效的年化週期數: {0}")]
    InvalidPeriodicity(f64),

    #[error("價格表錯誤: {0}")]
    Domain(#[from] DomainError),
}

/// 統計計算結果類型
pub type StatsResult<T> = Result<T, StatsError>;
