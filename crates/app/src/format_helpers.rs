//! Number and date formatting for dashboard tiles and tables.

use chrono::NaiveDate;

/// `1234567` -> `"1,234,567"`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an ISO date (`2024-01-15`) as `Jan 15, 2024`. A trailing time
/// part is ignored.
///
/// Anything that does not look like a date is returned unchanged.
pub fn format_date_human(date_str: &str) -> String {
    let day = date_str.get(..10).unwrap_or(date_str);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Percentage of `part` in `whole`, rounded. Zero when `whole` is zero.
pub fn percent_of(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round().min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(15847), "15,847");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn date_human() {
        assert_eq!(format_date_human("2024-01-15"), "Jan 15, 2024");
        assert_eq!(format_date_human("2024-12-01"), "Dec 1, 2024");
        assert_eq!(format_date_human("2024-03-09T10:00:00"), "Mar 9, 2024");
    }

    #[test]
    fn date_human_passes_through_garbage() {
        assert_eq!(format_date_human("soon"), "soon");
        assert_eq!(format_date_human("2024-13-01"), "2024-13-01");
        assert_eq!(format_date_human("2024-02-30"), "2024-02-30");
    }

    #[test]
    fn percent() {
        assert_eq!(percent_of(2, 5), 40);
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(5, 0), 0);
    }
}
