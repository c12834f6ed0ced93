pub mod calendar;
pub mod date_range;
pub mod money;
pub mod number_format;
pub mod year_month;
