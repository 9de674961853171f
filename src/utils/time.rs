//! 时间工具函数 — 预订时间窗口解析
//!
//! 所有日期→时间戳转换统一在 API handler 层完成，
//! repository 层只接收 `i64` Unix millis。
//!
//! 所有时间戳共享同一个隐式时区 (墙上时钟，无时区元数据)。

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 解析时间字符串 (HH:mm)
pub fn parse_time(time: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| AppError::validation(format!("Invalid time format: {}", time)))
}

/// 日期 + 时间 → Unix millis
pub fn datetime_millis(date: NaiveDate, time: NaiveTime) -> i64 {
    date.and_time(time).and_utc().timestamp_millis()
}

/// 解析 "YYYY-MM-DD" + "HH:mm" → Unix millis
pub fn parse_datetime_millis(date: &str, time: &str) -> AppResult<i64> {
    Ok(datetime_millis(parse_date(date)?, parse_time(time)?))
}

/// Unix millis → NaiveDateTime (仅用于日志/展示)
pub fn millis_to_datetime(millis: i64) -> Option<NaiveDateTime> {
    chrono::DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_date_and_time() {
        let millis = parse_datetime_millis("2024-01-01", "18:00").unwrap();
        let dt = millis_to_datetime(millis).unwrap();
        assert_eq!(dt.to_string(), "2024-01-01 18:00:00");
    }

    #[test]
    fn reject_malformed_date() {
        assert!(parse_date("01/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn reject_malformed_time() {
        assert!(parse_time("6pm").is_err());
        assert!(parse_time("25:00").is_err());
    }
}
