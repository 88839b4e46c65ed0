// File: crates/tipline-core/tests/label.rs
// Purpose: Date granularity, date label formats and the y-value number formats.

use chrono::{FixedOffset, NaiveDate};
use tipline_core::label::{format_reading, DEFAULT_MONTHS};
use tipline_core::{DateFormatter, FormatValue, Granularity, TipsError, Value, ValueFormat};

const HOUR: f64 = 3_600_000.0;
const DAY: f64 = 24.0 * HOUR;

fn ms(y: i32, m: u32, d: u32, h: u32, min: u32) -> f64 {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|d| d.and_hms_opt(h, min, 0))
        .expect("valid date")
        .and_utc()
        .timestamp_millis() as f64
}

#[test]
fn granularity_follows_domain_span() {
    assert_eq!(Granularity::of_span(2.0 * 365.0 * DAY), Granularity::Years);
    assert_eq!(Granularity::of_span(120.0 * DAY), Granularity::Months);
    assert_eq!(Granularity::of_span(30.0 * DAY), Granularity::Weeks);
    assert_eq!(Granularity::of_span(3.0 * DAY), Granularity::Days);
    assert_eq!(Granularity::of_span(6.0 * HOUR), Granularity::Hours);
    assert_eq!(Granularity::of_domain((6.0 * HOUR, 0.0)), Granularity::Hours);
}

#[test]
fn date_labels_per_granularity() {
    let f = DateFormatter::default();
    let key = ms(2015, 1, 5, 15, 0);
    assert_eq!(f.format(key, Granularity::Years), "2015");
    assert_eq!(f.format(key, Granularity::Months), "Jan. 5, 2015");
    assert_eq!(f.format(key, Granularity::Weeks), "Jan. 5");
    assert_eq!(f.format(key, Granularity::Days), "Jan. 5");
    assert_eq!(f.format(key, Granularity::Hours), "3 p.m.");
    assert_eq!(f.format(ms(2015, 1, 5, 15, 5), Granularity::Hours), "3:05 p.m.");
    assert_eq!(f.format(ms(2015, 1, 5, 0, 30), Granularity::Hours), "12:30 a.m.");
}

#[test]
fn end_to_end_granularity_examples() {
    let f = DateFormatter::default();
    let start = ms(2014, 3, 1, 0, 0);
    let key = ms(2015, 7, 14, 9, 0);
    assert_eq!(f.format(key, Granularity::of_domain((start, start + 2.0 * 365.0 * DAY))), "2015");
    assert_eq!(f.format(key, Granularity::of_domain((start, start + 3.0 * DAY))), "Jul. 14");
    assert_eq!(f.format(key, Granularity::of_domain((start, start + 6.0 * HOUR))), "9 a.m.");
}

#[test]
fn date_labels_use_offset_and_month_names() {
    let mut months = DEFAULT_MONTHS.map(String::from);
    months[0] = "Janv".to_string();
    let est = FixedOffset::west_opt(5 * 3600).expect("valid offset");
    let f = DateFormatter::new(months, est);
    let key = ms(2015, 1, 6, 3, 0);
    assert_eq!(f.format(key, Granularity::Days), "Janv. 5");
    assert_eq!(f.format(key, Granularity::Hours), "10 p.m.");
}

#[test]
fn value_format_parses_and_prints() {
    let f: ValueFormat = ",.2f".parse().expect("valid");
    assert!(f.grouping);
    assert_eq!(f.precision, Some(2));
    assert_eq!(f.to_string(), ",.2f");

    let max: ValueFormat = ".20f".parse().expect("d3 allows up to 20");
    assert_eq!(max.precision, Some(20));

    for bad in ["x", ".f", ".2d", ",,d", ".21f", ".999999999f", ".25"] {
        assert!(matches!(bad.parse::<ValueFormat>(), Err(TipsError::InvalidFormat(_))), "{bad}");
    }
}

#[test]
fn value_format_output() {
    let fmt = |pattern: &str, v: f64| pattern.parse::<ValueFormat>().expect("valid").format_value(v);
    assert_eq!(fmt(",.2f", 1234567.891), "1,234,567.89");
    assert_eq!(fmt(".0%", 0.256), "26%");
    assert_eq!(fmt(".1%", 0.256), "25.6%");
    assert_eq!(fmt("d", 3.6), "4");
    assert_eq!(fmt(",d", -1234567.0), "-1,234,567");
    assert_eq!(fmt("", 2.50), "2.5");
    assert_eq!(fmt("", 12.0), "12");
    assert_eq!(fmt(".2", 0.1262), "0.13");
}

#[test]
fn general_precision_counts_significant_digits() {
    let fmt = |pattern: &str, v: f64| pattern.parse::<ValueFormat>().expect("valid").format_value(v);
    assert_eq!(fmt(".3", 3.14159), "3.14");
    assert_eq!(fmt(".3g", 1234.5), "1230");
    assert_eq!(fmt(".3", 0.00012345), "0.000123");
    assert_eq!(fmt(".2", -47.0), "-47");
    assert_eq!(fmt(",.4", 1234567.0), "1,235,000");
    assert_eq!(fmt("", 0.1 + 0.2), "0.3");
    assert_eq!(fmt(".1", 0.0), "0");
}

#[test]
fn readings_get_prefix_suffix_or_placeholder() {
    let f: ValueFormat = ",.1f".parse().expect("valid");
    assert_eq!(format_reading(Value::Number(1234.56), &f, "$", "M", "n/a"), "$1,234.6M");
    assert_eq!(format_reading(Value::Missing, &f, "$", "M", "n/a"), "n/a");

    let custom = |v: f64| format!("{v:e}");
    assert_eq!(format_reading(Value::Number(1500.0), &custom, "", "", "-"), "1.5e3");
}
