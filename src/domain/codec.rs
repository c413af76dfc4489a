//! Delimited text codec for record import and export
//!
//! Export quotes every field (doubling internal quotes) and writes the
//! record type's field names as the header row. Import reads a header row
//! and turns each following line into a loosely-typed [`CsvRow`]; the
//! record types normalize rows into typed records, recording every value
//! that had to be coerced instead of silently defaulting it.

use chrono::NaiveDate;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::fmt::Display;
use std::str::FromStr;

use crate::domain::Record;
use crate::error::Result;

/// One imported data row: normalized header names paired with raw values
#[derive(Debug, Clone)]
pub struct CsvRow {
    line: usize,
    cells: Vec<(String, String)>,
}

/// All rows of an imported file plus the lines that could not be read
#[derive(Debug, Clone)]
pub struct RowSet {
    pub rows: Vec<CsvRow>,
    pub issues: Vec<String>,
}

/// Header names are matched ignoring case and separators, so `orderId`,
/// `Order ID` and `order_id` all address the same column.
fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

impl CsvRow {
    fn new(line: usize, headers: &[String], record: &StringRecord) -> Self {
        let cells = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        CsvRow { line, cells }
    }

    /// Raw value for a column, empty string if the column is absent
    pub fn value(&self, name: &str) -> String {
        let key = normalize_key(name);
        self.cells
            .iter()
            .find(|(h, _)| *h == key)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    }

    /// Numeric value; non-numeric input coerces to 0 and is recorded
    pub fn number(&self, name: &str, issues: &mut Vec<String>) -> f64 {
        let raw = self.value(name);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return 0.0;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                issues.push(format!(
                    "row {}: {} '{}' is not a number, using 0",
                    self.line, name, raw
                ));
                0.0
            }
        }
    }

    /// Non-negative whole number; fractional input is rounded
    pub fn count(&self, name: &str, issues: &mut Vec<String>) -> u32 {
        let value = self.number(name, issues);
        if value < 0.0 {
            issues.push(format!(
                "row {}: {} is negative, using 0",
                self.line, name
            ));
            0
        } else {
            value.round() as u32
        }
    }

    /// Optional date; empty stays empty, unreadable input is recorded
    pub fn date(&self, name: &str, issues: &mut Vec<String>) -> Option<NaiveDate> {
        let raw = self.value(name);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match parse_date(trimmed) {
            Some(date) => Some(date),
            None => {
                issues.push(format!(
                    "row {}: unrecognized date '{}', leaving empty",
                    self.line, raw
                ));
                None
            }
        }
    }

    /// Status value; unknown input falls back to the default and is recorded
    pub fn status<T>(&self, name: &str, issues: &mut Vec<String>) -> T
    where
        T: FromStr<Err = String> + Default + Display,
    {
        let raw = self.value(name);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return T::default();
        }
        match T::from_str(trimmed) {
            Ok(value) => value,
            Err(_) => {
                let fallback = T::default();
                issues.push(format!(
                    "row {}: unknown {} '{}', using {}",
                    self.line, name, raw, fallback
                ));
                fallback
            }
        }
    }
}

/// Parse a date in ISO (YYYY-MM-DD) or day-first (DD-MM-YYYY) form
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw, "%d-%m-%Y").ok())
}

/// Display form of an optional date (empty when absent)
pub fn fmt_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Display form of a numeric field (no trailing `.0` for whole values)
pub fn fmt_number(value: f64) -> String {
    format!("{}", value)
}

/// Read delimited text into rows. The first line is the header row;
/// unreadable lines are skipped and reported, not fatal.
pub fn read_rows(text: &str) -> Result<RowSet> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(normalize_key).collect();

    let mut rows = Vec::new();
    let mut issues = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let line = i + 1;
        match result {
            Ok(record) => rows.push(CsvRow::new(line, &headers, &record)),
            Err(e) => issues.push(format!("row {}: skipped unreadable line ({})", line, e)),
        }
    }

    Ok(RowSet { rows, issues })
}

/// Serialize rows with every field quoted
pub fn csv_string<I>(headers: &[&str], rows: I) -> Result<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut buf = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_writer(&mut buf);
        writer.write_record(headers)?;
        for row in rows {
            writer.write_record(&row)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Serialize a collection for export; `None` when there is nothing to export
pub fn export_csv<R: Record>(records: &[R]) -> Result<Option<String>> {
    if records.is_empty() {
        return Ok(None);
    }
    let rows = records.iter().map(|r| r.fields());
    csv_string(R::headers(), rows).map(Some)
}
