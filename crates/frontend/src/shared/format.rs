//! Display formatting for numbers, percentages, dates, and durations.
//!
//! Everything the pages put on screen goes through these helpers so the
//! three pages cannot drift apart in formatting.

use chrono::{DateTime, NaiveDate, Utc};

/// Whole values get thousands separators, fractional values one decimal.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format_thousands(value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Thousands-separated whole number (unit counts, capacities).
pub fn format_units(value: u64) -> String {
    format_thousands(value as i64)
}

fn format_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        grouped.push('-');
    }
    grouped.chars().rev().collect()
}

/// Rate in `[0, 1]` rendered as a percentage with one decimal.
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Source age: whole minutes under an hour, one-decimal hours otherwise.
pub fn format_age_hours(hours: f64) -> String {
    if hours < 1.0 {
        format!("{} minutes", (hours * 60.0).round() as i64)
    } else {
        format!("{:.1} hours", hours)
    }
}

/// `Jan 27, 2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Jan 27, 2025 10:05`
pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn whole_numbers_get_separators_fractions_get_one_decimal() {
        assert_eq!(format_number(2788.0), "2,788");
        assert_eq!(format_number(24.333), "24.3");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-1234.0), "-1,234");
    }

    #[test]
    fn unit_counts_are_thousands_separated() {
        assert_eq!(format_units(1_234_567), "1,234,567");
        assert_eq!(format_units(567), "567");
    }

    #[test]
    fn rates_render_as_one_decimal_percentages() {
        assert_eq!(format_percent(0.875), "87.5%");
        assert_eq!(format_percent(1.0), "100.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn ages_switch_units_at_one_hour() {
        assert_eq!(format_age_hours(0.5), "30 minutes");
        assert_eq!(format_age_hours(0.99), "59 minutes");
        assert_eq!(format_age_hours(1.0), "1.0 hours");
        assert_eq!(format_age_hours(2.5), "2.5 hours");
    }

    #[test]
    fn dates_and_timestamps_use_short_month_names() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 27).unwrap();
        assert_eq!(format_date(date), "Jan 27, 2025");

        let ts = Utc.with_ymd_and_hms(2025, 1, 27, 10, 5, 0).unwrap();
        assert_eq!(format_datetime(ts), "Jan 27, 2025 10:05");
    }

    #[test]
    fn single_digit_days_are_not_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        assert_eq!(format_date(date), "Feb 3, 2025");
    }
}
