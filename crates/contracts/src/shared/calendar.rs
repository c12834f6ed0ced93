//! Month grid layout for the range calendar
//!
//! Every month is laid out on a fixed 6x7 grid with Sunday in the first
//! column. Cells before the first day and after the last day are empty.

use chrono::{Datelike, NaiveDate};

use super::date_range::DateRangeSelection;
use super::year_month::YearMonth;

pub const WEEKS_PER_GRID: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub type Week = [Option<NaiveDate>; DAYS_PER_WEEK];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    weeks: [Week; WEEKS_PER_GRID],
}

impl MonthGrid {
    pub fn new(month: YearMonth) -> Self {
        let first = month.first_day();
        let offset = first.weekday().num_days_from_sunday() as usize;
        let days = month.days_in_month() as usize;

        let mut weeks = [[None; DAYS_PER_WEEK]; WEEKS_PER_GRID];
        for day in 0..days {
            let cell = offset + day;
            weeks[cell / DAYS_PER_WEEK][cell % DAYS_PER_WEEK] = first.with_day(day as u32 + 1);
        }

        Self { month, weeks }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// Heading like "October 2026"
    pub fn title(&self) -> String {
        format!("{} {}", self.month.month_name(), self.month.year())
    }

    pub fn weeks(&self) -> &[Week; WEEKS_PER_GRID] {
        &self.weeks
    }

    /// Non-empty cells in calendar order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flatten().filter_map(|cell| *cell)
    }
}

/// `count` consecutive months starting at `start`
pub fn visible_months(start: YearMonth, count: usize) -> Vec<YearMonth> {
    std::iter::successors(Some(start), |m| m.succ())
        .take(count)
        .collect()
}

/// Visual state of one day cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayState {
    /// Start or end of the selection
    pub selected: bool,
    /// Inside a complete selection
    pub in_range: bool,
    pub today: bool,
}

impl DayState {
    pub fn of(day: NaiveDate, selection: &DateRangeSelection, today: NaiveDate) -> Self {
        Self {
            selected: selection.is_endpoint(day),
            in_range: selection.contains(day),
            today: day == today,
        }
    }
}
