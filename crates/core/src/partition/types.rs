use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::WindowError;

/// Boundary literal format. Sortable and locale-free, so the rendered
/// condition compares correctly regardless of the session locale.
const BOUNDARY_FORMAT: &str = "%Y%m%d";

/// A half-open calendar window `[start, end)` over a date column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveDate,
    /// Exclusive upper bound.
    pub end: NaiveDate,
}

impl TimeWindow {
    /// Creates a window, enforcing `start < end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, WindowError> {
        if start >= end {
            return Err(WindowError::EmptyWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Whole calendar year `[Jan 1, Jan 1 of the next year)`.
    pub fn year(year: i32) -> Result<Self, WindowError> {
        let start = first_of(year, 1)?;
        let end = first_of(year + 1, 1)?;
        Ok(Self { start, end })
    }

    /// Whole calendar month `[first of month, first of the next month)`.
    pub fn month(year: i32, month: u32) -> Result<Self, WindowError> {
        let start = first_of(year, month)?;
        let end = if month == 12 {
            first_of(year + 1, 1)?
        } else {
            first_of(year, month + 1)?
        };
        Ok(Self { start, end })
    }

    /// Range condition over `column` with `YYYYMMDD` boundary literals.
    pub fn condition(&self, column: &str) -> String {
        format!(
            "{} >= '{}' AND {} < '{}'",
            column,
            self.start.format(BOUNDARY_FORMAT),
            column,
            self.end.format(BOUNDARY_FORMAT)
        )
    }
}

fn first_of(year: i32, month: u32) -> Result<NaiveDate, WindowError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(WindowError::OutOfRange { year, month })
}

/// Date pattern applied to a window's start date when naming a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameFormat {
    /// `2019`
    Year,
    /// `Jan-2019`
    MonthYear,
}

impl NameFormat {
    /// Renders the anchor date under this pattern.
    pub fn render(&self, anchor: NaiveDate) -> String {
        match self {
            NameFormat::Year => anchor.format("%Y").to_string(),
            NameFormat::MonthYear => anchor.format("%b-%Y").to_string(),
        }
    }
}

/// Fully resolved partition coordinates on the remote model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionIdentity {
    pub database: String,
    pub table: String,
    pub partition: String,
}

impl PartitionIdentity {
    /// Creates an identity from its three coordinates.
    pub fn new(
        database: impl Into<String>,
        table: impl Into<String>,
        partition: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            table: table.into(),
            partition: partition.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_rejects_empty_range() {
        assert!(matches!(
            TimeWindow::new(date(2020, 2, 1), date(2020, 1, 1)),
            Err(WindowError::EmptyWindow { .. })
        ));
        assert!(matches!(
            TimeWindow::new(date(2020, 1, 1), date(2020, 1, 1)),
            Err(WindowError::EmptyWindow { .. })
        ));
    }

    #[test]
    fn test_year_window_bounds() {
        let window = TimeWindow::year(2019).unwrap();
        assert_eq!(window.start, date(2019, 1, 1));
        assert_eq!(window.end, date(2020, 1, 1));
    }

    #[test]
    fn test_month_window_bounds() {
        let window = TimeWindow::month(2018, 1).unwrap();
        assert_eq!(window.start, date(2018, 1, 1));
        assert_eq!(window.end, date(2018, 2, 1));
    }

    #[test]
    fn test_december_window_rolls_into_next_year() {
        let window = TimeWindow::month(2019, 12).unwrap();
        assert_eq!(window.start, date(2019, 12, 1));
        assert_eq!(window.end, date(2020, 1, 1));
    }

    #[test]
    fn test_month_window_rejects_invalid_month() {
        assert_eq!(
            TimeWindow::month(2019, 13),
            Err(WindowError::OutOfRange {
                year: 2019,
                month: 13
            })
        );
    }

    #[test]
    fn test_condition_uses_sortable_boundaries() {
        let window = TimeWindow::month(2018, 1).unwrap();
        assert_eq!(
            window.condition("Date"),
            "Date >= '20180101' AND Date < '20180201'"
        );
    }

    #[test]
    fn test_name_format_year() {
        assert_eq!(NameFormat::Year.render(date(2019, 1, 1)), "2019");
    }

    #[test]
    fn test_name_format_month_year() {
        assert_eq!(NameFormat::MonthYear.render(date(2019, 6, 1)), "Jun-2019");
        assert_eq!(NameFormat::MonthYear.render(date(2019, 12, 1)), "Dec-2019");
    }
}
