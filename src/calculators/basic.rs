// 📅 Elementary calculators - date difference and percentage

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{parse_decimal, round2};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateDiffResult {
    Days(i64),
    Invalid,
}

impl DateDiffResult {
    pub fn summary(&self) -> String {
        match self {
            DateDiffResult::Days(days) => format!("Difference: {} days", days),
            DateDiffResult::Invalid => "Please enter valid dates".to_string(),
        }
    }
}

/// Absolute day difference between two ISO dates (YYYY-MM-DD).
pub fn date_difference_days(start: &str, end: &str) -> DateDiffResult {
    let start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d");
    let end = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d");

    match (start, end) {
        (Ok(start), Ok(end)) => DateDiffResult::Days((end - start).num_days().abs()),
        _ => DateDiffResult::Invalid,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentageResult {
    Value(f64),
    Invalid,
}

impl PercentageResult {
    pub fn summary_for(&self, base: &str, percentage: &str) -> String {
        match self {
            PercentageResult::Value(value) => {
                format!(
                    "{}% of {} = {:.2}",
                    percentage.trim(),
                    base.trim(),
                    value
                )
            }
            PercentageResult::Invalid => "Please enter valid numbers".to_string(),
        }
    }
}

/// `base * percentage / 100`, rounded to 2 decimals.
pub fn percentage_of(base: &str, percentage: &str) -> PercentageResult {
    match (parse_decimal(base), parse_decimal(percentage)) {
        (Some(base), Some(percentage)) => {
            PercentageResult::Value(round2(base * percentage / 100.0))
        }
        _ => PercentageResult::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_difference_reference_scenario() {
        assert_eq!(
            date_difference_days("2024-01-01", "2024-01-10"),
            DateDiffResult::Days(9)
        );
    }

    #[test]
    fn test_date_difference_is_absolute() {
        assert_eq!(
            date_difference_days("2024-01-10", "2024-01-01"),
            DateDiffResult::Days(9)
        );
    }

    #[test]
    fn test_date_difference_same_day() {
        assert_eq!(
            date_difference_days("2024-03-15", "2024-03-15"),
            DateDiffResult::Days(0)
        );
    }

    #[test]
    fn test_date_difference_across_leap_day() {
        // 2024 is a leap year
        assert_eq!(
            date_difference_days("2024-02-28", "2024-03-01"),
            DateDiffResult::Days(2)
        );
    }

    #[test]
    fn test_date_difference_invalid_inputs() {
        assert_eq!(date_difference_days("", "2024-01-10"), DateDiffResult::Invalid);
        assert_eq!(date_difference_days("2024-01-01", ""), DateDiffResult::Invalid);
        assert_eq!(
            date_difference_days("not-a-date", "2024-01-10"),
            DateDiffResult::Invalid
        );
        assert_eq!(
            date_difference_days("2024-13-01", "2024-01-10"),
            DateDiffResult::Invalid
        );
    }

    #[test]
    fn test_percentage_of() {
        assert_eq!(percentage_of("250", "20"), PercentageResult::Value(50.0));
        assert_eq!(percentage_of("33.4", "10"), PercentageResult::Value(3.34));
    }

    #[test]
    fn test_percentage_invalid_inputs() {
        assert_eq!(percentage_of("", "20"), PercentageResult::Invalid);
        assert_eq!(percentage_of("250", ""), PercentageResult::Invalid);
        assert_eq!(percentage_of("x", "y"), PercentageResult::Invalid);
    }

    #[test]
    fn test_summaries() {
        assert_eq!(
            date_difference_days("2024-01-01", "2024-01-10").summary(),
            "Difference: 9 days"
        );
        assert_eq!(
            percentage_of("250", "20").summary_for("250", "20"),
            "20% of 250 = 50.00"
        );
    }
}
