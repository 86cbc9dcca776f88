//! Display formatting for money and dates.
//!
//! Records keep machine values (cents, `NaiveDate`); everything the user
//! sees goes through these helpers.

use chrono::NaiveDate;

/// Format an amount in cents as US dollars: 12499 -> "$124.99".
pub fn format_usd_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!(
        "{}${}.{:02}",
        sign,
        format_thousands(abs / 100),
        abs % 100
    )
}

fn format_thousands(n: i64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// ISO date display, matching how the schedule data is shown: "2023-06-10".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// One decimal place rating display; zero renders as a dash.
pub fn format_rating(rating: f32) -> String {
    if rating <= 0.0 {
        "\u{2014}".to_string()
    } else {
        format!("{:.1}", rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_cents() {
        assert_eq!(format_usd_cents(12_499), "$124.99");
        assert_eq!(format_usd_cents(0), "$0.00");
        assert_eq!(format_usd_cents(5), "$0.05");
        assert_eq!(format_usd_cents(123_456_789), "$1,234,567.89");
        assert_eq!(format_usd_cents(-8_950), "-$89.50");
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2023, 6, 10).unwrap();
        assert_eq!(format_date(d), "2023-06-10");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.8), "4.8");
        assert_eq!(format_rating(0.0), "\u{2014}");
    }
}
