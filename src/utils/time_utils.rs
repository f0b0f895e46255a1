// time_utils.rs
//
// 價格表的時間欄位以毫秒時間戳 (i64) 儲存，領域層使用無時區的 NaiveDateTime。
// 本模組負責兩者之間的轉換。

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// 將 NaiveDateTime 轉換為毫秒時間戳（視為 UTC）
pub fn naive_to_timestamp_ms(dt: &NaiveDateTime) -> i64 {
    dt.and_utc().timestamp_millis()
}

/// 將毫秒時間戳轉換為 NaiveDateTime，超出範圍時返回 None
pub fn timestamp_ms_to_naive(ts: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(ts).map(|dt| dt.naive_utc())
}

/// 將 NaiveDateTime 數組轉換為毫秒時間戳數組
pub fn naives_to_timestamps(datetimes: &[NaiveDateTime]) -> Vec<i64> {
    datetimes.iter().map(naive_to_timestamp_ms).collect()
}

/// 日期的零點
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 從 `start` 開始，連續 `len` 天的日線索引
pub fn daily_index(start: NaiveDate, len: usize) -> Vec<NaiveDateTime> {
    (0..len)
        .map(|offset| start_of_day(start + Duration::days(offset as i64)))
        .collect()
}

/// 找出第一個未嚴格遞增的位置
pub fn first_non_increasing<T: PartialOrd>(values: &[T]) -> Option<usize> {
    values
        .windows(2)
        .position(|pair| pair[1] <= pair[0])
        .map(|pos| pos + 1)
}
