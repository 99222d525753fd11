//! 时间字段的序列化模块
//!
//! 远端列可能是 `timestamptz`、`timestamp` 或 `date`，返回的字符串格式各不相同：
//! - `2023-01-01T00:00:00+00:00` (RFC 3339)
//! - `2023-01-01T00:00:00.123` (无时区，按 UTC 处理)
//! - `2023-01-01` (按 UTC 零点处理)
//!
//! 统一解析为 `DateTime<Utc>`，序列化时输出 RFC 3339。

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

/// 解析远端返回的时间字符串
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // timestamptz 有时以空格分隔日期与时间
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// 页面上展示的日期，如 `5/3/2024`
pub fn display_date(dt: &DateTime<Utc>) -> String {
    dt.format("%-m/%-d/%Y").to_string()
}

/// 必填时间字段: `#[serde(with = "crate::date::flexible")]`
pub mod flexible {
    use super::*;

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_timestamp(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}

/// 可空时间字段: `#[serde(default, with = "crate::date::flexible_option")]`
pub mod flexible_option {
    use super::*;

    pub fn serialize<S: Serializer>(
        dt: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => serializer.serialize_some(&format_timestamp(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_timestamp(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {}", raw))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date(&utc(2024, 5, 3, 23, 0, 0)), "5/3/2024");
        assert_eq!(display_date(&utc(2023, 12, 25, 0, 0, 0)), "12/25/2023");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        assert_eq!(
            parse_timestamp("2024-03-01T10:00:00+02:00"),
            Some(utc(2024, 3, 1, 8, 0, 0))
        );
        assert_eq!(
            parse_timestamp("2024-03-01T10:00:00.123456+00:00").map(|d| d.timestamp()),
            Some(utc(2024, 3, 1, 10, 0, 0).timestamp())
        );
    }

    #[test]
    fn test_parse_space_separated_timestamptz() {
        assert_eq!(
            parse_timestamp("2024-03-01 10:00:00+00"),
            Some(utc(2024, 3, 1, 10, 0, 0))
        );
    }

    #[test]
    fn test_parse_naive_and_date_only() {
        assert_eq!(
            parse_timestamp("2023-05-20T12:30:00"),
            Some(utc(2023, 5, 20, 12, 30, 0))
        );
        assert_eq!(parse_timestamp("2023-01-01"), Some(utc(2023, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
    }
}
