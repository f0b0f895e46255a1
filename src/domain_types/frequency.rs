use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 每年交易日數，年化計算的預設週期數
pub const TRADING_DAYS: f64 = 252.0;

/// 觀測頻率
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annual,
}

impl Frequency {
    /// 每年的觀測區間數
    pub fn periods_per_year(&self) -> f64 {
        match self {
            Frequency::Daily => TRADING_DAYS,
            Frequency::Weekly => 52.0,
            Frequency::Monthly => 12.0,
            Frequency::Quarterly => 4.0,
            Frequency::Annual => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Annual => "annual",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "1d" => Ok(Frequency::Daily),
            "weekly" | "1w" => Ok(Frequency::Weekly),
            "monthly" | "1mo" => Ok(Frequency::Monthly),
            "quarterly" | "1q" => Ok(Frequency::Quarterly),
            "annual" | "yearly" | "1y" => Ok(Frequency::Annual),
            other => Err(format!("未知的頻率: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Frequency::Daily, 252.0)]
    #[case(Frequency::Weekly, 52.0)]
    #[case(Frequency::Monthly, 12.0)]
    #[case(Frequency::Quarterly, 4.0)]
    #[case(Frequency::Annual, 1.0)]
    fn test_periods_per_year(#[case] frequency: Frequency, #[case] expected: f64) {
        assert_eq!(frequency.periods_per_year(), expected);
        assert_eq!(frequency.to_string().parse::<Frequency>(), Ok(frequency));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("1D".parse::<Frequency>(), Ok(Frequency::Daily));
        assert_eq!("yearly".parse::<Frequency>(), Ok(Frequency::Annual));
        assert!("hourly".parse::<Frequency>().is_err());
        assert_eq!(Frequency::default(), Frequency::Daily);
    }
}
