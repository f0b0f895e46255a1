//! 基於 Polars 的價格表

use chrono::NaiveDateTime;
use polars::prelude::*;

use super::error::{DomainError, DomainResult};
use super::price_series::PriceSeries;
use crate::utils::time_utils::{
    first_non_increasing, naive_to_timestamp_ms, naives_to_timestamps, timestamp_ms_to_naive,
};

/// 價格表欄位名稱
pub struct ColumnName;

impl ColumnName {
    /// 時間欄位，以毫秒時間戳儲存
    pub const TIME: &'static str = "time";
}

/// 價格表
///
/// 包裝一個 DataFrame：一個 `time` 欄位加上每個商品一個 Float64 欄位。
/// 所有商品共用同一個嚴格遞增的時間索引，欄位順序即插入順序。
#[derive(Debug, Clone)]
pub struct PriceTable {
    df: DataFrame,
}

impl PriceTable {
    /// 以時間索引創建空的價格表
    pub fn new(timestamps: &[NaiveDateTime]) -> DomainResult<Self> {
        if let Some(index) = first_non_increasing(timestamps) {
            return Err(DomainError::NonIncreasingTimestamps {
                instrument: ColumnName::TIME.to_string(),
                index,
            });
        }

        let time = Series::new(ColumnName::TIME.into(), naives_to_timestamps(timestamps));
        let df = DataFrame::new(vec![time.into()])?;

        Ok(Self { df })
    }

    /// 由多個已對齊的價格序列創建價格表
    ///
    /// 第一個序列的時間戳作為索引，其餘序列必須完全相同。
    pub fn from_series(series: &[PriceSeries]) -> DomainResult<Self> {
        let Some(head) = series.first() else {
            return Self::new(&[]);
        };

        let mut table = Self::new(head.timestamps())?;
        for s in series {
            if s.timestamps() != head.timestamps() {
                return Err(DomainError::MisalignedSeries(s.name().to_string()));
            }
            table.insert(s.name(), s.prices().to_vec())?;
        }

        Ok(table)
    }

    /// 由現有 DataFrame 創建價格表
    ///
    /// `time` 欄位可以是毫秒整數或 Datetime，其餘欄位一律轉為 Float64。
    pub fn from_dataframe(df: DataFrame) -> DomainResult<Self> {
        if df.get_column_index(ColumnName::TIME).is_none() {
            return Err(DomainError::MissingColumn(ColumnName::TIME.to_string()));
        }

        let mut columns: Vec<Column> = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            if column.name().as_str() == ColumnName::TIME {
                let time = column
                    .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
                    .cast(&DataType::Int64)?;
                columns.insert(0, time);
            } else {
                columns.push(column.cast(&DataType::Float64)?);
            }
        }

        let table = Self {
            df: DataFrame::new(columns)?,
        };

        let timestamps = table.timestamps()?;
        if let Some(index) = first_non_increasing(&timestamps) {
            return Err(DomainError::NonIncreasingTimestamps {
                instrument: ColumnName::TIME.to_string(),
                index,
            });
        }

        Ok(table)
    }

    /// 新增一個商品欄位
    pub fn insert(&mut self, instrument: &str, prices: Vec<f64>) -> DomainResult<()> {
        if instrument == ColumnName::TIME || self.contains(instrument) {
            return Err(DomainError::DuplicateInstrument(instrument.to_string()));
        }

        if prices.len() != self.len() {
            return Err(DomainError::LengthMismatch {
                instrument: instrument.to_string(),
                timestamps: self.len(),
                prices: prices.len(),
            });
        }

        self.df.with_column(Series::new(instrument.into(), prices))?;
        Ok(())
    }

    /// 檢查是否包含指定商品
    pub fn contains(&self, instrument: &str) -> bool {
        instrument != ColumnName::TIME && self.df.get_column_index(instrument).is_some()
    }

    /// 商品代碼，依欄位順序
    pub fn instruments(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .into_iter()
            .filter(|name| name.as_str() != ColumnName::TIME)
            .map(|name| name.to_string())
            .collect()
    }

    /// 觀測點數量
    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// 時間索引
    pub fn timestamps(&self) -> DomainResult<Vec<NaiveDateTime>> {
        let time = self.df.column(ColumnName::TIME)?.as_materialized_series().i64()?;

        time.into_iter()
            .enumerate()
            .map(|(index, value)| {
                let ms = value.ok_or_else(|| DomainError::MissingValue {
                    instrument: ColumnName::TIME.to_string(),
                    index,
                })?;
                timestamp_ms_to_naive(ms).ok_or(DomainError::InvalidTimestamp(ms))
            })
            .collect()
    }

    /// 指定商品的價格，遇到空值時報錯
    pub fn column_values(&self, instrument: &str) -> DomainResult<Vec<f64>> {
        if !self.contains(instrument) {
            return Err(DomainError::UnknownInstrument(instrument.to_string()));
        }

        let prices = self.df.column(instrument)?.as_materialized_series().f64()?;

        prices
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                value.ok_or_else(|| DomainError::MissingValue {
                    instrument: instrument.to_string(),
                    index,
                })
            })
            .collect()
    }

    /// 取出單一商品的價格序列
    pub fn series(&self, instrument: &str) -> DomainResult<PriceSeries> {
        let prices = self.column_values(instrument)?;
        PriceSeries::new(instrument, self.timestamps()?, prices)
    }

    /// 依給定順序選取商品
    pub fn select(&self, instruments: &[&str]) -> DomainResult<Self> {
        if let Some(missing) = instruments.iter().find(|name| !self.contains(name)) {
            return Err(DomainError::UnknownInstrument(missing.to_string()));
        }

        let df = self
            .df
            .select(std::iter::once(ColumnName::TIME).chain(instruments.iter().copied()))?;

        Ok(Self { df })
    }

    /// 保留 `start` 當時及之後的列
    pub fn since(&self, start: NaiveDateTime) -> DomainResult<Self> {
        let cutoff = naive_to_timestamp_ms(&start);
        let time = self.df.column(ColumnName::TIME)?.as_materialized_series().i64()?;
        let mask: BooleanChunked = time
            .into_iter()
            .map(|value| value.map(|ms| ms >= cutoff))
            .collect();

        Ok(Self {
            df: self.df.filter(&mask)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time_utils::{daily_index, start_of_day};
    use assert_matches::assert_matches;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn sample_table() -> PriceTable {
        let mut table = PriceTable::new(&daily_index(start(), 3)).unwrap();
        table.insert("SPY", vec![100.0, 101.0, 102.0]).unwrap();
        table.insert("TLT", vec![90.0, 89.0, 91.0]).unwrap();
        table
    }

    #[test]
    fn test_price_table_basic_properties() {
        let table = sample_table();
        assert_eq!(table.len(), 3);
        assert_eq!(table.instruments(), vec!["SPY", "TLT"]);
        assert!(table.contains("TLT"));
        assert!(!table.contains(ColumnName::TIME));
        assert_eq!(table.timestamps().unwrap(), daily_index(start(), 3));
        assert_eq!(table.column_values("TLT").unwrap(), vec![90.0, 89.0, 91.0]);
    }

    #[test]
    fn test_price_table_insert_errors() {
        let mut table = sample_table();
        assert_matches!(
            table.insert("SPY", vec![1.0, 2.0, 3.0]),
            Err(DomainError::DuplicateInstrument(name)) if name == "SPY"
        );
        assert_matches!(
            table.insert("time", vec![1.0, 2.0, 3.0]),
            Err(DomainError::DuplicateInstrument(_))
        );
        assert_matches!(
            table.insert("GLD", vec![1.0]),
            Err(DomainError::LengthMismatch { timestamps: 3, prices: 1, .. })
        );
    }

    #[test]
    fn test_from_series_rejects_misaligned() {
        let a = PriceSeries::daily("A", start(), vec![1.0, 2.0]);
        let b = PriceSeries::daily("B", start().succ_opt().unwrap(), vec![1.0, 2.0]);
        assert_matches!(
            PriceTable::from_series(&[a, b]),
            Err(DomainError::MisalignedSeries(name)) if name == "B"
        );
    }

    #[test]
    fn test_select_and_series() {
        let table = sample_table();
        let selected = table.select(&["TLT", "SPY"]).unwrap();
        assert_eq!(selected.instruments(), vec!["TLT", "SPY"]);

        let spy = table.series("SPY").unwrap();
        assert_eq!(spy.prices(), &[100.0, 101.0, 102.0]);
        assert_matches!(table.select(&["GLD"]), Err(DomainError::UnknownInstrument(_)));
    }

    #[test]
    fn test_since_filters_rows() {
        let table = sample_table();
        let cutoff = start_of_day(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        let tail = table.since(cutoff).unwrap();
        assert_eq!(tail.len(), 2);
        assert_eq!(tail.column_values("SPY").unwrap(), vec![101.0, 102.0]);

        let later = start_of_day(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert!(table.since(later).unwrap().is_empty());
    }

    #[rstest]
    #[case(NaiveDate::from_ymd_opt(2023, 12, 1).unwrap())]
    #[case(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())]
    #[case(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())]
    #[case(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap())]
    fn test_since_matches_series_since(#[case] cutoff: NaiveDate) {
        let table = sample_table();
        let cutoff = start_of_day(cutoff);

        let tail = table.since(cutoff).unwrap();
        for instrument in table.instruments() {
            let expected = table.series(&instrument).unwrap().since(cutoff);
            let actual = tail.series(&instrument).unwrap();
            assert_eq!(actual, expected);
        }
        assert_eq!(tail.instruments(), table.instruments());
    }

    #[rstest]
    #[case(vec![3000i64, 2000, 4000], 1)]
    #[case(vec![1000i64, 1000, 2000], 1)]
    #[case(vec![1000i64, 2000, 1500], 2)]
    fn test_from_dataframe_rejects_unordered_time(#[case] time: Vec<i64>, #[case] expected: usize) {
        let df = DataFrame::new(vec![
            Series::new(ColumnName::TIME.into(), time).into(),
            Series::new("BTC".into(), &[1.0, 2.0, 3.0]).into(),
        ])
        .unwrap();

        assert_matches!(
            PriceTable::from_dataframe(df),
            Err(DomainError::NonIncreasingTimestamps { index, .. }) if index == expected
        );
    }

    #[test]
    fn test_from_dataframe() {
        let df = DataFrame::new(vec![
            Series::new(ColumnName::TIME.into(), &[1000i64, 2000, 3000]).into(),
            Series::new("BTC".into(), &[10i64, 11, 12]).into(),
        ])
        .unwrap();

        let table = PriceTable::from_dataframe(df).unwrap();
        assert_eq!(table.instruments(), vec!["BTC"]);
        assert_eq!(table.column_values("BTC").unwrap(), vec![10.0, 11.0, 12.0]);

        let missing_time = DataFrame::new(vec![Series::new("BTC".into(), &[1.0]).into()]).unwrap();
        assert_matches!(
            PriceTable::from_dataframe(missing_time),
            Err(DomainError::MissingColumn(_))
        );
    }

    #[test]
    fn test_column_values_reports_nulls() {
        let df = DataFrame::new(vec![
            Series::new(ColumnName::TIME.into(), &[1000i64, 2000]).into(),
            Series::new("ETH".into(), &[Some(1.0), None]).into(),
        ])
        .unwrap();

        let table = PriceTable::from_dataframe(df).unwrap();
        assert_matches!(
            table.column_values("ETH"),
            Err(DomainError::MissingValue { index: 1, .. })
        );
    }
}
