//! Shared utility functions for the sales visualizer crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Date format used by the sales CSV and by D3.js ("YYYY-MM-DD").
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Human-readable span between two dates, e.g. "2024-01-01 to 2024-03-31".
    /// A single-day span collapses to one date.
    pub fn format_span(first: &NaiveDate, last: &NaiveDate) -> String {
        if first == last {
            format_date(first)
        } else {
            format!("{} to {}", format_date(first), format_date(last))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_date() {
            let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
            assert_eq!(format_date(&date), "2024-01-02");
        }

        #[test]
        fn test_format_span() {
            let a = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            let b = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
            assert_eq!(format_span(&a, &b), "2024-01-01 to 2024-03-31");
            assert_eq!(format_span(&a, &a), "2024-01-01");
        }
    }
}

/// Text helpers for chart labels
pub mod text {
    /// Upper-case the first character and lower-case the rest.
    ///
    /// `"north"` becomes `"North"`, `"ALL"` becomes `"All"`.
    pub fn capitalize(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }

}
