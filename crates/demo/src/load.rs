// File: crates/demo/src/load.rs
// Summary: CSV loader: first column is the time key, every other column is one series.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use tipline_core::{Datum, Table, Value};
use tracing::info;

/// Load a wide CSV into a validated table. Empty cells become `Value::Missing`.
pub fn load_series_csv(path: &Path) -> Result<(Vec<String>, Table)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    if headers.len() < 2 {
        anyhow::bail!("{}: need a time column and at least one series column", path.display());
    }
    let names = headers[1..].to_vec();
    info!(series = ?names, "headers");

    let mut rows = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let raw_key = rec.get(0).unwrap_or_default();
        let key = parse_time_ms(raw_key)
            .with_context(|| format!("row {}: unreadable time {:?}", line + 1, raw_key))?;
        let values = (1..headers.len())
            .map(|i| parse_value(rec.get(i).unwrap_or_default()))
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("row {}", line + 1))?;
        rows.push(Datum::new(key, values));
    }
    let table = Table::new(rows).with_context(|| format!("validating {}", path.display()))?;
    Ok((names, table))
}

/// Epoch milliseconds from `YYYY-MM-DD`, `YYYY-MM-DD HH:MM`, or a bare epoch-ms number.
pub fn parse_time_ms(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        return Some(n as f64);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return Some(dt.and_utc().timestamp_millis() as f64);
    }
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(d.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis() as f64)
}

fn parse_value(s: &str) -> Result<Value> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Value::Missing);
    }
    let v = s
        .replace(',', "")
        .parse::<f64>()
        .with_context(|| format!("not a number: {s:?}"))?;
    if !v.is_finite() {
        // leave the cell empty for a gap
        anyhow::bail!("not a finite number: {s:?}");
    }
    Ok(Value::Number(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_cells() {
        assert_eq!(parse_time_ms("1420416000000"), Some(1_420_416_000_000.0));
        assert_eq!(parse_time_ms("2015-01-05"), Some(1_420_416_000_000.0));
        assert_eq!(parse_time_ms("2015-01-05 01:30"), Some(1_420_421_400_000.0));
        assert_eq!(parse_time_ms(""), None);
        assert_eq!(parse_time_ms("Jan 5"), None);
    }

    #[test]
    fn value_cells() {
        assert_eq!(parse_value("").unwrap(), Value::Missing);
        assert_eq!(parse_value("1,234.5").unwrap(), Value::Number(1234.5));
        assert!(parse_value("abc").is_err());
        assert!(parse_value("NaN").is_err());
        assert!(parse_value("inf").is_err());
    }

    #[test]
    fn sample_csv_loads() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample_series.csv");
        let (names, table) = load_series_csv(&path).unwrap();
        assert_eq!(names, vec!["north", "south", "west"]);
        assert_eq!(table.len(), 60);
        assert!(table.rows().iter().any(|d| d.series.contains(&Value::Missing)));
    }
}
