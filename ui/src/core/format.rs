//! Formatting helpers for presenting experiment metadata.

use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("{:.0}%", value.clamp(0.0, 1.0) * 100.0)
}

/// `2021-03-02T10:15:00Z` → `Mar 2 · 10:15`. Unparseable input is shown as-is.
pub fn format_start_time(iso: &str) -> String {
    let trimmed = iso.trim();
    if trimmed.is_empty() {
        return "—".to_string();
    }

    match OffsetDateTime::parse(trimmed, &Rfc3339) {
        Ok(stamp) => format!("{} · {}", date_badge(stamp), time_badge(stamp)),
        Err(_) => trimmed.to_string(),
    }
}

fn date_badge(date: OffsetDateTime) -> String {
    date.format(&format_description!(
        "[month repr:short] [day padding:none]"
    ))
    .unwrap_or_else(|_| "—".to_string())
}

fn time_badge(date: OffsetDateTime) -> String {
    date.format(&format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| "—".to_string())
}
