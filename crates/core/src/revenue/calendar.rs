//! Month intervals for a report year.

use chrono::NaiveDate;
use hotelres_shared::types::MonthBoundary;

use super::error::RevenueError;

/// The twelve month intervals of one year under a boundary rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCalendar {
    year: i32,
    months: [(NaiveDate, NaiveDate); 12],
}

impl YearCalendar {
    /// Builds the calendar for `year`.
    ///
    /// # Errors
    ///
    /// Returns `RevenueError::YearOutOfRange` if a month start cannot be represented.
    pub fn new(year: i32, boundary: MonthBoundary) -> Result<Self, RevenueError> {
        let first_day = |y: i32, m: u32| {
            NaiveDate::from_ymd_opt(y, m, 1).ok_or(RevenueError::YearOutOfRange(year))
        };

        let mut months = [(NaiveDate::MIN, NaiveDate::MIN); 12];
        for (index, slot) in (1u32..).zip(months.iter_mut()) {
            let start = first_day(year, index)?;
            let end = match (index, boundary) {
                (12, MonthBoundary::HalfOpen) => first_day(year + 1, 1)?,
                (12, MonthBoundary::InclusiveDecember31) => {
                    NaiveDate::from_ymd_opt(year, 12, 31)
                        .ok_or(RevenueError::YearOutOfRange(year))?
                }
                (m, _) => first_day(year, m + 1)?,
            };
            *slot = (start, end);
        }

        Ok(Self { year, months })
    }

    /// The calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// `[start, end)` of each month, January first.
    pub fn months(&self) -> impl Iterator<Item = (NaiveDate, NaiveDate)> + '_ {
        self.months.iter().copied()
    }

    /// `[Jan 1, end of December)` under the boundary rule.
    #[must_use]
    pub fn span(&self) -> (NaiveDate, NaiveDate) {
        (self.months[0].0, self.months[11].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_half_open_months() {
        let calendar = YearCalendar::new(2024, MonthBoundary::HalfOpen).unwrap();
        let months: Vec<_> = calendar.months().collect();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], (date(2024, 1, 1), date(2024, 2, 1)));
        assert_eq!(months[1], (date(2024, 2, 1), date(2024, 3, 1)));
        assert_eq!(months[11], (date(2024, 12, 1), date(2025, 1, 1)));
        assert_eq!(calendar.span(), (date(2024, 1, 1), date(2025, 1, 1)));
    }

    #[test]
    fn test_inclusive_december_only_changes_december() {
        let half_open = YearCalendar::new(2024, MonthBoundary::HalfOpen).unwrap();
        let legacy = YearCalendar::new(2024, MonthBoundary::InclusiveDecember31).unwrap();
        let a: Vec<_> = half_open.months().collect();
        let b: Vec<_> = legacy.months().collect();
        assert_eq!(a[..11], b[..11]);
        assert_eq!(b[11], (date(2024, 12, 1), date(2024, 12, 31)));
        assert_eq!(legacy.span(), (date(2024, 1, 1), date(2024, 12, 31)));
    }

    #[test]
    fn test_months_are_contiguous() {
        let calendar = YearCalendar::new(2023, MonthBoundary::HalfOpen).unwrap();
        let months: Vec<_> = calendar.months().collect();
        for pair in months.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }
}
