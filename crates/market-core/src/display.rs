//! Display-mapping helpers for tabular presentation
//!
//! All functions here are pure, stateless, and total: unknown statuses fall
//! back to a neutral style rather than failing.

use chrono::{DateTime, Utc};

/// Map a status discriminator to a style class for its badge.
///
/// Matching is case-insensitive; unmapped values get the neutral badge.
#[must_use]
pub fn status_color(status: &str) -> &'static str {
    match status.to_ascii_uppercase().as_str() {
        "PENDING" | "SUSPENDED" | "REFUNDED" => "badge-warning",
        "CONFIRMED" | "PROCESSING" | "SHIPPED" => "badge-info",
        "COMPLETED" | "DELIVERED" | "APPROVED" | "SUCCESS" => "badge-success",
        "CANCELLED" | "REJECTED" | "FAILED" => "badge-danger",
        _ => "badge-neutral",
    }
}

/// Map a status discriminator to its human-readable label.
///
/// Unknown values are title-cased as a best effort.
#[must_use]
pub fn status_label(status: &str) -> String {
    match status.to_ascii_uppercase().as_str() {
        "PENDING" => "Pending".to_string(),
        "CONFIRMED" => "Confirmed".to_string(),
        "PROCESSING" => "Processing".to_string(),
        "SHIPPED" => "Shipped".to_string(),
        "COMPLETED" => "Completed".to_string(),
        "DELIVERED" => "Delivered".to_string(),
        "CANCELLED" => "Cancelled".to_string(),
        "APPROVED" => "Approved".to_string(),
        "SUSPENDED" => "Suspended".to_string(),
        "REJECTED" => "Rejected".to_string(),
        "SUCCESS" => "Successful".to_string(),
        "FAILED" => "Failed".to_string(),
        "REFUNDED" => "Refunded".to_string(),
        _ => title_case(status),
    }
}

fn title_case(value: &str) -> String {
    let lower = value.to_ascii_lowercase();
    let mut chars = lower.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_uppercase().to_string() + chars.as_str()
    })
}

/// Format an amount in the platform currency with thousands separators
/// and two decimal places.
#[must_use]
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let negative = amount < 0.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{frac:02}")
}

/// Format a timestamp for table display (`YYYY-MM-DD HH:MM`, UTC)
#[must_use]
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Format an RFC 3339 timestamp string for table display.
///
/// Unparseable input is returned as-is so a bad server value never breaks
/// rendering.
#[must_use]
pub fn format_date_str(iso: &str) -> String {
    DateTime::parse_from_rfc3339(iso).map_or_else(
        |_| iso.to_string(),
        |parsed| format_date(&parsed.with_timezone(&Utc)),
    )
}
