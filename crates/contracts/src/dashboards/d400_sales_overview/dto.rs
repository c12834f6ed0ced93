use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::year_month::YearMonth;

/// Request for the sales overview dashboard
///
/// Query string: `?date_from=YYYY-MM-DD&date_to=YYYY-MM-DD`.
/// `date_to` is exclusive: the series covers `date_to - date_from` days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesOverviewRequest {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

/// Response for the sales overview dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOverviewResponse {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    /// Human readable range, e.g. "January 1st, 2024 - January 31st, 2024"
    pub range_label: String,
    /// One record per day, chronological
    pub daily: Vec<DailyRecord>,
    /// One record per month present in `daily`
    pub monthly: Vec<MonthlyRecord>,
}

/// Metrics for a single calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Day in format "YYYY-MM-DD"
    pub date: NaiveDate,
    /// Units sold
    pub sales: u32,
    /// Number of orders
    pub transactions: u32,
    /// Revenue, rounded to cents
    pub revenue: f64,
    /// Average order value: revenue / transactions, 0 without transactions
    pub aov: f64,
}

/// Metrics summed over a calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Month in format "YYYY-MM"
    pub date: YearMonth,
    pub sales: u64,
    pub transactions: u64,
    /// Sum of daily revenue, rounded to cents
    pub revenue: f64,
    /// Recomputed from the monthly sums, not averaged from daily values
    pub aov: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parses_iso_dates() {
        let request: SalesOverviewRequest =
            serde_json::from_str(r#"{"date_from":"2024-01-01","date_to":"2024-02-01"}"#).unwrap();
        assert_eq!(request.date_from, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(request.date_to, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_record_dates_serialize_as_chart_keys() {
        let daily = DailyRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            sales: 80,
            transactions: 5,
            revenue: 50.0,
            aov: 10.0,
        };
        let monthly = MonthlyRecord {
            date: YearMonth::new(2024, 1).unwrap(),
            sales: 80,
            transactions: 5,
            revenue: 50.0,
            aov: 10.0,
        };

        let daily_json = serde_json::to_value(&daily).unwrap();
        let monthly_json = serde_json::to_value(&monthly).unwrap();
        assert_eq!(daily_json["date"], "2024-01-02");
        assert_eq!(monthly_json["date"], "2024-01");
        assert_eq!(monthly_json["aov"], 10.0);
    }
}
