use contracts::dashboards::d400_sales_overview::{DailyRecord, MonthlyRecord};
use contracts::shared::money::{average_order_value, round2};
use contracts::shared::year_month::YearMonth;
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Copy)]
struct MonthTotals {
    sales: u64,
    transactions: u64,
    revenue: f64,
}

/// Collapse daily records into one record per year-month
///
/// Months come out in the order they are first seen in `daily`, so
/// chronological input gives chronological output. AOV is recomputed from
/// the monthly sums, never averaged from daily AOV values.
pub fn aggregate_monthly(daily: &[DailyRecord]) -> Vec<MonthlyRecord> {
    let mut months: Vec<YearMonth> = Vec::new();
    let mut totals: HashMap<YearMonth, MonthTotals> = HashMap::new();

    for record in daily {
        let month = YearMonth::from_date(record.date);
        let entry = totals.entry(month).or_insert_with(|| {
            months.push(month);
            MonthTotals::default()
        });
        entry.sales += u64::from(record.sales);
        entry.transactions += u64::from(record.transactions);
        entry.revenue += record.revenue;
    }

    months
        .into_iter()
        .map(|month| {
            let month_totals = totals.get(&month).copied().unwrap_or_default();
            let revenue = round2(month_totals.revenue);
            MonthlyRecord {
                date: month,
                sales: month_totals.sales,
                transactions: month_totals.transactions,
                revenue,
                aov: average_order_value(revenue, month_totals.transactions),
            }
        })
        .collect()
}
