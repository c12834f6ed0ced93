use chrono::NaiveDate;
use contracts::dashboards::d400_sales_overview::DailyRecord;
use contracts::shared::money::{average_order_value, round2};
use rand::Rng;

use crate::shared::config::GeneratorConfig;

/// Synthesize one record per day for `days` consecutive days from `start`
///
/// Placeholder data: values are drawn from the thread-local RNG, so two
/// calls never return the same series.
pub fn generate_daily_data(start: NaiveDate, days: u32, config: &GeneratorConfig) -> Vec<DailyRecord> {
    generate_daily_data_with(&mut rand::thread_rng(), start, days, config)
}

/// Same as [`generate_daily_data`] with a caller supplied RNG
///
/// `config` must pass [`GeneratorConfig::validate`]; empty ranges panic in `gen_range`.
pub fn generate_daily_data_with<R: Rng>(
    rng: &mut R,
    start: NaiveDate,
    days: u32,
    config: &GeneratorConfig,
) -> Vec<DailyRecord> {
    start
        .iter_days()
        .take(days as usize)
        .map(|date| synthesize_day(&mut *rng, date, config))
        .collect()
}

fn synthesize_day<R: Rng>(rng: &mut R, date: NaiveDate, config: &GeneratorConfig) -> DailyRecord {
    let sales = rng.gen_range(config.sales_min..config.sales_max);
    let transactions = rng.gen_range(config.transactions_min..config.transactions_max);
    let unit_price = rng.gen_range(config.unit_price_min..config.unit_price_max);

    let revenue = round2(f64::from(sales) * unit_price);

    DailyRecord {
        date,
        sales,
        transactions,
        revenue,
        aov: average_order_value(revenue, u64::from(transactions)),
    }
}
