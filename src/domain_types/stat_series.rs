use serde::Serialize;

/// 每個商品一個數值的統計結果，保留價格表的欄位順序
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatSeries {
    name: String,
    values: Vec<(String, f64)>,
}

impl StatSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// 統計量名稱，例如 `return` 或 `volatility`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push(&mut self, instrument: impl Into<String>, value: f64) {
        self.values.push((instrument.into(), value));
    }

    pub fn get(&self, instrument: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == instrument)
            .map(|(_, value)| *value)
    }

    pub fn instruments(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
