pub mod memory;
pub mod source;

pub use memory::InMemorySource;
pub use source::{DataError, DataResult, PriceTableSource, SeriesSource};
