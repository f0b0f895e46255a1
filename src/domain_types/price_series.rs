use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};
use crate::utils::time_utils::{daily_index, first_non_increasing};

/// 單一商品的價格序列
///
/// 時間戳必須嚴格遞增，且與價格一一對應。價格本身不在此處驗證，
/// 缺失值可以 NaN 表示並以 [`PriceSeries::dropna`] 移除。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPriceSeries")]
pub struct PriceSeries {
    name: String,
    timestamps: Vec<NaiveDateTime>,
    prices: Vec<f64>,
}

/// 反序列化時的原始欄位，經 [`PriceSeries::new`] 驗證後才成為價格序列
#[derive(Deserialize)]
struct RawPriceSeries {
    name: String,
    timestamps: Vec<NaiveDateTime>,
    prices: Vec<f64>,
}

impl TryFrom<RawPriceSeries> for PriceSeries {
    type Error = DomainError;

    fn try_from(raw: RawPriceSeries) -> DomainResult<Self> {
        Self::new(raw.name, raw.timestamps, raw.prices)
    }
}

impl PriceSeries {
    /// 創建新的價格序列
    pub fn new(
        name: impl Into<String>,
        timestamps: Vec<NaiveDateTime>,
        prices: Vec<f64>,
    ) -> DomainResult<Self> {
        let name = name.into();

        if timestamps.len() != prices.len() {
            return Err(DomainError::LengthMismatch {
                instrument: name,
                timestamps: timestamps.len(),
                prices: prices.len(),
            });
        }

        if let Some(index) = first_non_increasing(&timestamps) {
            return Err(DomainError::NonIncreasingTimestamps {
                instrument: name,
                index,
            });
        }

        Ok(Self {
            name,
            timestamps,
            prices,
        })
    }

    /// 以連續日線索引創建價格序列
    pub fn daily(name: impl Into<String>, start: NaiveDate, prices: Vec<f64>) -> Self {
        let timestamps = daily_index(start, prices.len());
        Self {
            name: name.into(),
            timestamps,
            prices,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// 獲取數據點數量
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// 檢查是否為空
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn first(&self) -> Option<(NaiveDateTime, f64)> {
        self.timestamps.first().copied().zip(self.prices.first().copied())
    }

    pub fn last(&self) -> Option<(NaiveDateTime, f64)> {
        self.timestamps.last().copied().zip(self.prices.last().copied())
    }

    /// 迭代 (時間戳, 價格) 對
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDateTime, f64)> + '_ {
        self.timestamps.iter().copied().zip(self.prices.iter().copied())
    }

    /// 移除非有限值（NaN、無窮大）的觀測點
    pub fn dropna(&self) -> Self {
        let (timestamps, prices): (Vec<_>, Vec<_>) = self.iter().filter(|(_, price)| price.is_finite()).unzip();
        Self {
            name: self.name.clone(),
            timestamps,
            prices,
        }
    }

    /// 保留 `start` 當時及之後的觀測點
    pub fn since(&self, start: NaiveDateTime) -> Self {
        let offset = self.timestamps.partition_point(|ts| *ts < start);
        Self {
            name: self.name.clone(),
            timestamps: self.timestamps[offset..].to_vec(),
            prices: self.prices[offset..].to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time_utils::start_of_day;
    use assert_matches::assert_matches;

    fn day(d: u32) -> NaiveDateTime {
        start_of_day(NaiveDate::from_ymd_opt(2024, 3, d).unwrap())
    }

    #[test]
    fn test_price_series_creation() {
        let series = PriceSeries::new("SPY", vec![day(1), day(4)], vec![100.0, 101.0]).unwrap();
        assert_eq!(series.name(), "SPY");
        assert_eq!(series.len(), 2);
        assert_eq!(series.first(), Some((day(1), 100.0)));
        assert_eq!(series.last(), Some((day(4), 101.0)));
    }

    #[test]
    fn test_price_series_rejects_length_mismatch() {
        let err = PriceSeries::new("SPY", vec![day(1)], vec![100.0, 101.0]).unwrap_err();
        assert_matches!(
            err,
            DomainError::LengthMismatch { timestamps: 1, prices: 2, .. }
        );
    }

    #[test]
    fn test_price_series_rejects_unordered_time() {
        let err = PriceSeries::new("SPY", vec![day(2), day(2)], vec![1.0, 1.0]).unwrap_err();
        assert_matches!(err, DomainError::NonIncreasingTimestamps { index: 1, .. });

        let err = PriceSeries::new("SPY", vec![day(3), day(1)], vec![1.0, 1.0]).unwrap_err();
        assert_matches!(err, DomainError::NonIncreasingTimestamps { index: 1, .. });
    }

    #[test]
    fn test_dropna_and_since() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let series = PriceSeries::daily("DGS10", start, vec![4.1, f64::NAN, 4.3, 4.2]);

        let clean = series.dropna();
        assert_eq!(clean.prices(), &[4.1, 4.3, 4.2]);
        assert_eq!(clean.timestamps(), &[day(1), day(3), day(4)]);

        let tail = series.since(day(3));
        assert_eq!(tail.prices(), &[4.3, 4.2]);
        assert!(series.since(day(10)).is_empty());
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"name":"SPY","timestamps":["2024-03-01T00:00:00","2024-03-04T00:00:00"],"prices":[100.0,101.0]}"#;
        let series: PriceSeries = serde_json::from_str(json).unwrap();
        assert_eq!(series, PriceSeries::new("SPY", vec![day(1), day(4)], vec![100.0, 101.0]).unwrap());

        let roundtrip: PriceSeries = serde_json::from_str(&serde_json::to_string(&series).unwrap()).unwrap();
        assert_eq!(roundtrip, series);

        let too_few_prices = r#"{"name":"SPY","timestamps":["2024-03-01T00:00:00","2024-03-02T00:00:00","2024-03-03T00:00:00","2024-03-04T00:00:00"],"prices":[1.0]}"#;
        let err = serde_json::from_str::<PriceSeries>(too_few_prices).unwrap_err();
        assert!(err.to_string().contains("長度不一致"), "{err}");

        let unordered = r#"{"name":"SPY","timestamps":["2024-03-03T00:00:00","2024-03-01T00:00:00"],"prices":[1.0,2.0]}"#;
        let err = serde_json::from_str::<PriceSeries>(unordered).unwrap_err();
        assert!(err.to_string().contains("時間戳未嚴格遞增"), "{err}");
    }

    #[test]
    fn test_empty_series() {
        let series = PriceSeries::new("EMPTY", vec![], vec![]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.first(), None);
    }
}
