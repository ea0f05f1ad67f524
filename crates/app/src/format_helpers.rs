//! Shared formatting utilities for the UI layer.
//!
//! Inputs are the backend's ISO-8601 strings, either a plain date
//! ("2026-01-20") or an RFC 3339 timestamp ("2026-01-20T21:35:00Z").

use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_date(s: &str) -> Option<NaiveDate> {
    let head = s.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Format an ISO date string as "Jan 20, 2026".
///
/// Unparseable input comes back unchanged.
pub fn format_date_human(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Format an ISO datetime string as "Jan 20, 2026 9:35 PM".
///
/// Falls back to date-only if the time portion is missing.
pub fn format_datetime_human(date_str: &str) -> String {
    match parse_datetime(date_str) {
        Some(dt) => dt.format("%b %-d, %Y %-I:%M %p").to_string(),
        None => format_date_human(date_str),
    }
}

/// Convert a snake_case key to Title Case ("mid_term" → "Mid Term").
pub fn format_snake_case_title(s: &str) -> String {
    s.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// "87.5%" with at most one decimal.
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}%")
    } else {
        format!("{rounded:.1}%")
    }
}

/// Render a loosely-typed JSON cell for a records table.
pub fn format_json_cell(value: Option<&serde_json::Value>) -> String {
    use serde_json::Value;
    match value {
        None | Some(Value::Null) => "—".to_string(),
        Some(Value::String(s)) if s.is_empty() => "—".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "Yes".to_string(),
        Some(Value::Bool(false)) => "No".to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Array(items)) => items.len().to_string(),
        Some(other) => other.to_string(),
    }
}

/// Best-effort MIME type from a file name, for uploads the browser did not
/// label.
pub fn content_type_for(file_name: &str) -> String {
    let lower = file_name.to_lowercase();
    let ext = lower.rsplit_once('.').map(|(_, ext)| ext).unwrap_or_default();
    match ext {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "ppt" | "pptx" => "application/vnd.ms-powerpoint",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "txt" => "text/plain",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
    .to_string()
}

/// "2.4 MB", "310 KB" or "12 B".
pub fn format_file_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let size = bytes as f64;
    if size >= KB * KB {
        format!("{:.1} MB", size / (KB * KB))
    } else if size >= KB {
        format!("{:.0} KB", size / KB)
    } else {
        format!("{bytes} B")
    }
}

/// Today's date in the browser's local time zone, as the backend expects it.
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
