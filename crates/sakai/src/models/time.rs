//! Timestamp decoding for the shapes Sakai emits.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use serde_json::Value;

/// Decode a Sakai instant.
///
/// Accepts epoch milliseconds (number or numeric string), a `java.time`
/// style `{"epochSecond", "nano"}` object, or a `{"time": millis}` wrapper.
pub(crate) fn instant(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => DateTime::from_timestamp_millis(n.as_i64()?),
        Value::String(s) => DateTime::from_timestamp_millis(s.trim().parse().ok()?),
        Value::Object(obj) => {
            if let Some(secs) = obj.get("epochSecond").and_then(Value::as_i64) {
                let nanos = obj.get("nano").and_then(Value::as_u64).unwrap_or(0);
                DateTime::from_timestamp(secs, u32::try_from(nanos).ok()?)
            } else {
                instant(obj.get("time")?)
            }
        }
        _ => None,
    }
}

/// Decode the compact `yyyyMMddHHmmssSSS` form used by content listings.
pub(crate) fn compact(value: &str) -> Option<DateTime<Utc>> {
    if value.len() < 14 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (stamp, millis) = value.split_at(14);
    let base = NaiveDateTime::parse_from_str(stamp, "%Y%m%d%H%M%S")
        .ok()?
        .and_utc();

    if millis.is_empty() {
        return Some(base);
    }
    let millis: i64 = millis.parse().ok()?;
    base.checked_add_signed(TimeDelta::try_milliseconds(millis)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn epoch_millis_number() {
        let t = instant(&json!(1_600_000_000_000i64)).unwrap();
        assert_eq!(t.timestamp(), 1_600_000_000);
    }

    #[test]
    fn epoch_millis_string() {
        let t = instant(&json!("1600000000500")).unwrap();
        assert_eq!(t.timestamp_millis(), 1_600_000_000_500);
    }

    #[test]
    fn epoch_second_object() {
        let t = instant(&json!({"epochSecond": 1_600_000_000i64, "nano": 0})).unwrap();
        assert_eq!(t.timestamp(), 1_600_000_000);
    }

    #[test]
    fn time_wrapper_object() {
        let t = instant(&json!({"display": "Sep 13", "time": 1_600_000_000_000i64})).unwrap();
        assert_eq!(t.timestamp(), 1_600_000_000);
    }

    #[test]
    fn unsupported_shapes() {
        assert!(instant(&json!(null)).is_none());
        assert!(instant(&json!("tomorrow")).is_none());
        assert!(instant(&json!({"display": "Sep 13"})).is_none());
    }

    #[test]
    fn compact_with_millis() {
        let t = compact("20200913120000250").unwrap();
        assert_eq!(t.to_rfc3339(), "2020-09-13T12:00:00.250+00:00");
    }

    #[test]
    fn compact_rejects_garbage() {
        assert!(compact("2020-09-13").is_none());
        assert!(compact("").is_none());
    }
}
