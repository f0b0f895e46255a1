//! 記憶體數據來源

use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

use super::source::{DataError, DataResult, PriceTableSource, SeriesSource};
use crate::domain_types::{PriceSeries, PriceTable};
use crate::utils::time_utils::start_of_day;

/// 以預先載入的價格序列實現兩種數據來源
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    series: HashMap<String, PriceSeries>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入或取代一個序列，以序列名稱為鍵
    pub fn insert(&mut self, series: PriceSeries) -> Option<PriceSeries> {
        self.series.insert(series.name().to_string(), series)
    }

    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.insert(series);
        self
    }

    fn lookup(&self, name: &str) -> DataResult<&PriceSeries> {
        self.series
            .get(name)
            .ok_or_else(|| DataError::UnknownInstrument(name.to_string()))
    }
}

impl PriceTableSource for InMemorySource {
    fn fetch_prices(&self, tickers: &[&str], start: Option<NaiveDate>) -> DataResult<PriceTable> {
        if tickers.is_empty() {
            return Err(DataError::NoTickers);
        }

        let selected = tickers
            .iter()
            .map(|ticker| {
                let series = self.lookup(ticker)?;
                Ok(match start {
                    Some(date) => series.since(start_of_day(date)),
                    None => series.clone(),
                })
            })
            .collect::<DataResult<Vec<_>>>()?;

        debug!(tickers = tickers.len(), start = ?start, "從記憶體讀取價格表");

        Ok(PriceTable::from_series(&selected)?)
    }
}

impl SeriesSource for InMemorySource {
    fn fetch_series(&self, name: &str) -> DataResult<PriceSeries> {
        let series = self.lookup(name)?.dropna();
        debug!(name, observations = series.len(), "從記憶體讀取序列");
        Ok(series)
    }
}
