/// Utilities for date and time formatting
///
/// The backend sends local date-times without an offset
/// (`2025-03-01T09:15:00` or with fractional seconds).
use chrono::{NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim().trim_end_matches('Z');
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Format ISO datetime string to DD/MM/YYYY HH:MM
/// Example: "2024-03-15T14:02:26.123" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    match parse_datetime(datetime_str) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => datetime_str.to_string(),
    }
}

/// Format ISO date string to DD/MM/YYYY
/// Example: "2024-03-15" or "2024-03-15T14:02:26" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Today's date in the browser's zone, as accepted by `<input type="date">`
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
