// File: crates/tipline-core/src/label.rs
// Summary: Tip text: date labels at a span-dependent granularity and y-value number formatting.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TipsError;
use crate::scale::Time;
use crate::series::Value;

const HOUR_MS: f64 = 3_600_000.0;
const DAY_MS: f64 = 24.0 * HOUR_MS;
const WEEK_MS: f64 = 7.0 * DAY_MS;
const YEAR_MS: f64 = 365.0 * DAY_MS;

/// Date label granularity, picked from the visible time-domain span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
}

impl Granularity {
    pub fn of_span(span_ms: f64) -> Self {
        let span = span_ms.abs();
        if span >= YEAR_MS {
            Granularity::Years
        } else if span >= 8.0 * WEEK_MS {
            Granularity::Months
        } else if span >= 8.0 * DAY_MS {
            Granularity::Weeks
        } else if span >= DAY_MS {
            Granularity::Days
        } else {
            Granularity::Hours
        }
    }

    pub fn of_domain((t0, t1): (Time, Time)) -> Self {
        Self::of_span(t1 - t0)
    }
}

pub const DEFAULT_MONTHS: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Writes time keys as date labels in a fixed UTC offset.
#[derive(Clone, Debug)]
pub struct DateFormatter {
    months: [String; 12],
    offset: FixedOffset,
}

impl DateFormatter {
    pub fn new(months: [String; 12], offset: FixedOffset) -> Self {
        Self { months, offset }
    }

    /// `2015` / `Jan. 5, 2015` / `Jan. 5` / `3 p.m.`, `3:05 p.m.`
    pub fn format(&self, key: Time, granularity: Granularity) -> String {
        let Some(utc) = DateTime::from_timestamp_millis(key.round() as i64) else {
            return key.to_string();
        };
        let d = utc.with_timezone(&self.offset);
        let month = &self.months[d.month0() as usize];
        match granularity {
            Granularity::Years => d.year().to_string(),
            Granularity::Months => format!("{month}. {}, {}", d.day(), d.year()),
            Granularity::Weeks | Granularity::Days => format!("{month}. {}", d.day()),
            Granularity::Hours => {
                let (pm, hour) = d.hour12();
                let suffix = if pm { "p.m." } else { "a.m." };
                match d.minute() {
                    0 => format!("{hour} {suffix}"),
                    m => format!("{hour}:{m:02} {suffix}"),
                }
            }
        }
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_MONTHS.map(String::from), Utc.fix())
    }
}

/// Formats a y value. Implemented for [`ValueFormat`] and for plain closures.
pub trait FormatValue {
    fn format_value(&self, v: f64) -> String;
}

impl<F: Fn(f64) -> String> FormatValue for F {
    fn format_value(&self, v: f64) -> String { self(v) }
}

/// Longest precision accepted, as in d3-format.
pub const MAX_PRECISION: usize = 20;

/// Subset of d3-format specifiers: `[,][.precision][f|%|d|g]`.
///
/// Precision counts decimal places for `f` and `%`, significant digits for general.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ValueFormat {
    pub grouping: bool,
    pub precision: Option<usize>,
    pub kind: FormatKind,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatKind {
    #[default]
    General,
    Fixed,
    Percent,
    Integer,
}

impl FromStr for ValueFormat {
    type Err = TipsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TipsError::InvalidFormat(s.to_string());
        let mut rest = s.trim();
        let grouping = rest.starts_with(',');
        if grouping {
            rest = &rest[1..];
        }
        let mut precision = None;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let digits = after_dot.chars().take_while(|c| c.is_ascii_digit()).count();
            if digits == 0 {
                return Err(bad());
            }
            let p = after_dot[..digits].parse::<usize>().map_err(|_| bad())?;
            if p > MAX_PRECISION {
                return Err(bad());
            }
            precision = Some(p);
            rest = &after_dot[digits..];
        }
        let kind = match rest {
            "" | "g" => FormatKind::General,
            "f" => FormatKind::Fixed,
            "%" => FormatKind::Percent,
            "d" => FormatKind::Integer,
            _ => return Err(bad()),
        };
        if precision.is_some() && kind == FormatKind::Integer {
            return Err(bad());
        }
        Ok(Self { grouping, precision, kind })
    }
}

impl TryFrom<String> for ValueFormat {
    type Error = TipsError;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<ValueFormat> for String {
    fn from(f: ValueFormat) -> Self { f.to_string() }
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.grouping {
            f.write_str(",")?;
        }
        if let Some(p) = self.precision {
            write!(f, ".{p}")?;
        }
        f.write_str(match self.kind {
            FormatKind::General => "",
            FormatKind::Fixed => "f",
            FormatKind::Percent => "%",
            FormatKind::Integer => "d",
        })
    }
}

impl FormatValue for ValueFormat {
    fn format_value(&self, v: f64) -> String {
        let body = match self.kind {
            FormatKind::Fixed => format!("{:.*}", self.precision.unwrap_or(6), v),
            FormatKind::Percent => format!("{:.*}", self.precision.unwrap_or(0), v * 100.0),
            FormatKind::Integer => format!("{:.0}", v),
            FormatKind::General => general(v, self.precision.unwrap_or(12)),
        };
        let body = if self.grouping { group_thousands(&body) } else { body };
        match self.kind {
            FormatKind::Percent => body + "%",
            _ => body,
        }
    }
}

/// `digits` significant digits, fixed notation, trailing zeros dropped.
fn general(v: f64, digits: usize) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let digits = digits.max(1) as i32;
    if v == 0.0 {
        return "0".to_string();
    }
    let exp = v.abs().log10().floor() as i32;
    let s = if exp >= digits {
        let unit = 10f64.powi(exp + 1 - digits);
        format!("{:.0}", (v / unit).round() * unit)
    } else {
        format!("{:.*}", (digits - 1 - exp).max(0) as usize, v)
    };
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn group_thousands(s: &str) -> String {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(u) => ("-", u),
        None => ("", s),
    };
    let (int, frac) = match unsigned.find('.') {
        Some(i) => unsigned.split_at(i),
        None => (unsigned, ""),
    };
    let mut out = String::with_capacity(s.len() + int.len() / 3);
    out.push_str(sign);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str(frac);
    out
}

/// `prefix + format(v) + suffix`, or `missing_text` for a missing value.
pub fn format_reading(
    value: Value,
    format: &dyn FormatValue,
    prefix: &str,
    suffix: &str,
    missing_text: &str,
) -> String {
    match value {
        Value::Number(v) => format!("{prefix}{}{suffix}", format.format_value(v)),
        Value::Missing => missing_text.to_string(),
    }
}
