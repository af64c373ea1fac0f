//! Display formatting: names, roles, phone numbers, currency, grades,
//! dates. Everything here is pure; wire values stay untouched and only
//! their presentation changes.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime};

use crate::net::types::GradingSystem;

// =============================================================================
// DATES
// =============================================================================

/// Accepts both RFC 3339 timestamps (row `created_at`) and plain
/// `YYYY-MM-DD` dates (term boundaries).
fn parse_date(raw: &str) -> Option<Date> {
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts.date());
    }
    let fmt = time::macros::format_description!("[year]-[month]-[day]");
    Date::parse(raw, &fmt).ok()
}

/// Long date, e.g. `1 September 2024`. Unparseable input is returned as-is.
#[must_use]
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format!("{} {} {}", date.day(), date.month(), date.year()),
        None => raw.to_owned(),
    }
}

/// Short date, e.g. `1 Sep`.
#[must_use]
pub fn format_short_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => {
            let month = date.month().to_string();
            format!("{} {}", date.day(), &month[..3])
        }
        None => raw.to_owned(),
    }
}

// =============================================================================
// NAMES
// =============================================================================

#[must_use]
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}").trim().to_owned()
}

/// Uppercased initials, e.g. `JA` for John Administrator.
#[must_use]
pub fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .next()
        .into_iter()
        .chain(last_name.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

// =============================================================================
// PHONE / CURRENCY / NUMBERS
// =============================================================================

/// Nigerian phone formatting: `+234-801-234-5678` for international
/// numbers, `0801-234-5678` for local ones. Anything else passes through.
#[must_use]
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.starts_with("234") && digits.len() > 9 {
        format!("+{}-{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..9], &digits[9..])
    } else if digits.starts_with('0') && digits.len() > 7 {
        format!("{}-{}-{}", &digits[..4], &digits[4..7], &digits[7..])
    } else {
        phone.to_owned()
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Naira amount with kobo, e.g. `₦1,250,000.00`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let kobo_total = (amount.abs() * 100.0).round() as u64;
    format!("{sign}₦{}.{:02}", group_thousands(kobo_total / 100), kobo_total % 100)
}

/// Integer with thousands separators.
#[must_use]
pub fn format_number(value: u64) -> String {
    group_thousands(value)
}

/// Fixed-precision percentage, e.g. `94.2%`.
#[must_use]
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{value:.prec$}%", prec = decimals)
}

// =============================================================================
// GRADES / TEXT
// =============================================================================

/// Score rendered per the school's grading system.
#[must_use]
pub fn format_grade(score: f64, system: GradingSystem) -> String {
    match system {
        GradingSystem::Percentage => format!("{score}%"),
        GradingSystem::Letter => {
            let letter = if score >= 90.0 {
                "A"
            } else if score >= 80.0 {
                "B"
            } else if score >= 70.0 {
                "C"
            } else if score >= 60.0 {
                "D"
            } else if score >= 50.0 {
                "E"
            } else {
                "F"
            };
            letter.to_owned()
        }
    }
}

/// Cut at `max_chars` characters with a `...` suffix.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[must_use]
pub fn title_case(text: &str) -> String {
    text.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}
