//! 報酬與波動率計算
//!
//! 提供累積報酬、年化報酬與年化波動率。每個函數都只讀取輸入，
//! 不保留任何狀態，可在多執行緒中直接呼叫。

pub mod error;
pub mod returns;
pub mod summary;
pub mod traits;

pub use error::{StatsError, StatsResult};
pub use returns::{annualized_return, annualized_volatility, cumulative_return, pct_change};
pub use summary::{PerformanceAnalyzer, PerformanceSummary};
pub use traits::ReturnStats;
