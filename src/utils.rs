pub mod time_utils;

pub use time_utils::{
    daily_index, naive_to_timestamp_ms, naives_to_timestamps, start_of_day, timestamp_ms_to_naive,
};
