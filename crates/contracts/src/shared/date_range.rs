//! Date range selection shared by the calendar picker and the dashboard
//!
//! A selection is built by clicking days: the first click sets the start,
//! the second click closes the range (swapping ends if needed), and a third
//! click starts over.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::year_month::YearMonth;

/// Label shown when nothing is selected
pub const NO_SELECTION_LABEL: &str = "Select Date Range";
const START_PLACEHOLDER: &str = "Start Date";
const END_PLACEHOLDER: &str = "End Date";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeSelection {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRangeSelection {
    /// Complete range `[from, to]`
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Open range with only a start day
    pub fn starting_at(from: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    /// Apply a click on `day` and return the new selection
    pub fn select(self, day: NaiveDate) -> Self {
        match (self.from, self.to) {
            (Some(from), None) if day < from => Self::new(day, from),
            (Some(from), None) => Self::new(from, day),
            _ => Self::starting_at(day),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// `day` is the start or the end of the selection
    pub fn is_endpoint(&self, day: NaiveDate) -> bool {
        self.from == Some(day) || self.to == Some(day)
    }

    /// `day` lies within a complete selection, ends included
    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= day && day <= to,
            _ => false,
        }
    }

    pub fn as_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.from?, self.to?))
    }

    /// Month the calendar should open on
    pub fn anchor_month(&self, today: NaiveDate) -> YearMonth {
        YearMonth::from_date(self.from.unwrap_or(today))
    }
}

/// Number of whole days from `from` up to (not including) `to`; 0 when reversed
pub fn day_span(from: NaiveDate, to: NaiveDate) -> u32 {
    let days = (to - from).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// The `days`-long window ending today
pub fn trailing_range(today: NaiveDate, days: u32) -> DateRangeSelection {
    let from = today
        .checked_sub_signed(Duration::days(i64::from(days)))
        .unwrap_or(today);
    DateRangeSelection::new(from, today)
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Long date like "October 16th, 2026"
pub fn format_long_date(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {}{}, {}",
        YearMonth::from_date(date).month_name(),
        day,
        ordinal_suffix(day),
        date.year()
    )
}

/// Text for the date range button
pub fn format_range_label(selection: Option<&DateRangeSelection>) -> String {
    let Some(selection) = selection else {
        return NO_SELECTION_LABEL.to_string();
    };
    let start = selection
        .from
        .map(format_long_date)
        .unwrap_or_else(|| START_PLACEHOLDER.to_string());
    let end = selection
        .to
        .map(format_long_date)
        .unwrap_or_else(|| END_PLACEHOLDER.to_string());
    format!("{} - {}", start, end)
}
