//! Table rows for the dashboard cards

use contracts::dashboards::d400_sales_overview::{DailyRecord, MonthlyRecord};

use crate::shared::number_format::{format_count, format_money};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Sales,
    Transactions,
    Revenue,
    Aov,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Sales => "Sales",
            Metric::Transactions => "Transactions",
            Metric::Revenue => "Revenue",
            Metric::Aov => "AOV",
        }
    }

    fn format_daily(&self, record: &DailyRecord) -> String {
        match self {
            Metric::Sales => format_count(u64::from(record.sales)),
            Metric::Transactions => format_count(u64::from(record.transactions)),
            Metric::Revenue => format_money(record.revenue),
            Metric::Aov => format_money(record.aov),
        }
    }

    fn format_monthly(&self, record: &MonthlyRecord) -> String {
        match self {
            Metric::Sales => format_count(record.sales),
            Metric::Transactions => format_count(record.transactions),
            Metric::Revenue => format_money(record.revenue),
            Metric::Aov => format_money(record.aov),
        }
    }
}

/// One table row: period key and formatted value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRow {
    pub period: String,
    pub value: String,
}

pub fn daily_series(records: &[DailyRecord], metric: Metric) -> Vec<SeriesRow> {
    records
        .iter()
        .map(|r| SeriesRow {
            period: r.date.format("%Y-%m-%d").to_string(),
            value: metric.format_daily(r),
        })
        .collect()
}

pub fn monthly_series(records: &[MonthlyRecord], metric: Metric) -> Vec<SeriesRow> {
    records
        .iter()
        .map(|r| SeriesRow {
            period: r.date.to_string(),
            value: metric.format_monthly(r),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::shared::year_month::YearMonth;

    fn daily() -> Vec<DailyRecord> {
        vec![
            DailyRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                sales: 1200,
                transactions: 10,
                revenue: 1000.0,
                aov: 100.0,
            },
            DailyRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                sales: 80,
                transactions: 5,
                revenue: 50.5,
                aov: 10.1,
            },
        ]
    }

    #[test]
    fn test_daily_series() {
        let rows = daily_series(&daily(), Metric::Sales);
        assert_eq!(
            rows[0],
            SeriesRow {
                period: "2024-01-01".into(),
                value: "1 200".into()
            }
        );
        let revenue = daily_series(&daily(), Metric::Revenue);
        assert_eq!(revenue[0].value, "1 000.00");
        assert_eq!(revenue[1].value, "50.50");
    }

    #[test]
    fn test_monthly_series() {
        let monthly = vec![MonthlyRecord {
            date: YearMonth::new(2024, 1).unwrap(),
            sales: 1280,
            transactions: 15,
            revenue: 1050.5,
            aov: 70.03,
        }];
        let rows = monthly_series(&monthly, Metric::Aov);
        assert_eq!(rows[0].period, "2024-01");
        assert_eq!(rows[0].value, "70.03");
        assert_eq!(monthly_series(&monthly, Metric::Transactions)[0].value, "15");
    }

    #[test]
    fn test_empty_series() {
        assert!(daily_series(&[], Metric::Sales).is_empty());
        assert!(monthly_series(&[], Metric::Revenue).is_empty());
    }
}
