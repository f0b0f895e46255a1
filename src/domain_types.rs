pub mod error;
pub mod frequency;
pub mod price_series;
pub mod price_table;
pub mod stat_series;

pub use error::{DomainError, DomainResult};
pub use frequency::{Frequency, TRADING_DAYS};
pub use price_series::PriceSeries;
pub use price_table::{ColumnName, PriceTable};
pub use stat_series::StatSeries;
