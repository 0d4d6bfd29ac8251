//! Unit tests for the Temporal module

use chrono::{NaiveDate, TimeZone, Utc};
use core_kernel::{TemporalError, Timezone};

#[test]
fn test_default_timezone_is_utc() {
    assert_eq!(Timezone::default().to_string(), "UTC");
}

#[test]
fn test_local_date_for_instant_late_in_utc_day() {
    let tz: Timezone = "America/Bogota".parse().unwrap();
    let instant = Utc.with_ymd_and_hms(2018, 8, 17, 23, 30, 0).unwrap();

    assert_eq!(tz.local_date(instant), NaiveDate::from_ymd_opt(2018, 8, 17).unwrap());
}

#[test]
fn test_local_date_east_of_utc_rolls_forward() {
    let tz: Timezone = "Asia/Tokyo".parse().unwrap();
    let instant = Utc.with_ymd_and_hms(2018, 8, 16, 20, 0, 0).unwrap();

    assert_eq!(tz.local_date(instant), NaiveDate::from_ymd_opt(2018, 8, 17).unwrap());
}

#[test]
fn test_timezone_serde_roundtrip_by_name() {
    let tz: Timezone = "America/Bogota".parse().unwrap();
    let json = serde_json::to_string(&tz).unwrap();
    assert_eq!(json, "\"America/Bogota\"");

    let back: Timezone = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tz);
}

#[test]
fn test_timezone_deserialize_rejects_unknown_name() {
    let result: Result<Timezone, _> = serde_json::from_str("\"Atlantis/Capital\"");
    assert!(result.is_err());
}

#[test]
fn test_parse_unknown_timezone_error() {
    assert!(matches!(
        "Atlantis/Capital".parse::<Timezone>(),
        Err(TemporalError::UnknownTimezone(_))
    ));
}
