use chrono::{TimeZone, Utc};
use rust_data_series::{ElementConfig, Element, Kind, TimestampFormat};

// The process-wide format is installed once per test binary and any `Element::set` freezes it,
// so this file holds a single test.
#[test]
fn installed_format_drives_parsing_and_rendering() {
    let cfg = ElementConfig::from_json_str(r#"{"timestamp_format":"%Y/%m/%d %H:%M:%S"}"#).unwrap();
    cfg.install().unwrap();
    // Re-installing the same format is accepted, a different one is not.
    cfg.install().unwrap();
    let err = rust_data_series::init_timestamp_format(TimestampFormat::default()).unwrap_err();
    assert!(err.to_string().contains("already set"));

    assert_eq!(TimestampFormat::global().pattern(), "%Y/%m/%d %H:%M:%S");

    let e = Element::from_source(Kind::Timestamp, "2022/02/03 04:05:06");
    assert_eq!(
        e.to_timestamp().unwrap(),
        Utc.with_ymd_and_hms(2022, 2, 3, 4, 5, 6).unwrap()
    );
    assert_eq!(e.to_string(), "2022/02/03 04:05:06");
    assert!(Element::from_source(Kind::Timestamp, "2022-02-03 04:05:06").is_na());

    let as_text = Element::from_source(Kind::Text, &e);
    assert_eq!(as_text.to_string(), "2022/02/03 04:05:06");
    assert!(e.equal(&as_text));

    // Explicit formats bypass the global one.
    let dashed = TimestampFormat::default();
    let mut other = Element::new(Kind::Timestamp);
    other.set_with("2022-02-03 04:05:06", &dashed);
    assert!(other.equal(&e));
}

