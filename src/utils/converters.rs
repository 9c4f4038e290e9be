// src/utils/converters.rs
//
// Small formatting helpers shared by the audio key builder and the DTO layer.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Zero-pads a chapter or verse number to three digits ("7" -> "007").
///
/// Numbers above 999 are printed as-is.
pub fn three_digits(number: u32) -> String {
    format!("{:03}", number)
}

/// Formats a timestamp as `dd/MM/yyyy` in the timestamp's own zone.
pub fn format_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_three_digits_pads() {
        assert_eq!(three_digits(1), "001");
        assert_eq!(three_digits(42), "042");
        assert_eq!(three_digits(114), "114");
        assert_eq!(three_digits(1234), "1234");
    }

    #[test]
    fn test_format_date_uses_day_month_year() {
        let date = Utc.with_ymd_and_hms(2024, 3, 9, 22, 30, 0).unwrap();
        assert_eq!(format_date(&date), "09/03/2024");
    }

    #[test]
    fn test_format_date_respects_offset() {
        // 22:30 UTC is already the next day at UTC+7
        let date = Utc.with_ymd_and_hms(2024, 3, 9, 22, 30, 0).unwrap();
        let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();
        assert_eq!(format_date(&date.with_timezone(&jakarta)), "10/03/2024");
    }
}
