use chrono::NaiveDate;
use contracts::dashboards::d400_sales_overview::{SalesOverviewRequest, SalesOverviewResponse};
use contracts::shared::date_range::{day_span, format_range_label, trailing_range, DateRangeSelection};
use rand::Rng;

use super::aggregator::aggregate_monthly;
use super::generator::generate_daily_data_with;
use crate::shared::config::Config;
use crate::shared::error::{DashboardError, DashboardResult};

/// Build the dashboard payload for a date range
///
/// Covers `date_to - date_from` days starting at `date_from`; a reversed
/// range gives empty series.
pub fn build_sales_overview(
    request: SalesOverviewRequest,
    config: &Config,
) -> DashboardResult<SalesOverviewResponse> {
    build_sales_overview_with(&mut rand::thread_rng(), request, config)
}

pub fn build_sales_overview_with<R: Rng>(
    rng: &mut R,
    request: SalesOverviewRequest,
    config: &Config,
) -> DashboardResult<SalesOverviewResponse> {
    config.generator.validate()?;

    let days = day_span(request.date_from, request.date_to);
    let max = config.dashboard.max_range_days;
    if days > max {
        return Err(DashboardError::RangeTooLarge { days, max });
    }

    let daily = generate_daily_data_with(rng, request.date_from, days, &config.generator);
    let monthly = aggregate_monthly(&daily);

    tracing::info!(
        "D400 sales overview {}..{}: {} days, {} months",
        request.date_from,
        request.date_to,
        daily.len(),
        monthly.len()
    );

    let selection = DateRangeSelection::new(request.date_from, request.date_to);

    Ok(SalesOverviewResponse {
        date_from: request.date_from,
        date_to: request.date_to,
        range_label: format_range_label(Some(&selection)),
        daily,
        monthly,
    })
}

/// Range shown on first load: the configured number of days up to `today`
pub fn default_range(today: NaiveDate, config: &Config) -> SalesOverviewRequest {
    let range = trailing_range(today, config.dashboard.default_range_days);
    SalesOverviewRequest {
        date_from: range.from.unwrap_or(today),
        date_to: range.to.unwrap_or(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(from: NaiveDate, to: NaiveDate) -> SalesOverviewRequest {
        SalesOverviewRequest {
            date_from: from,
            date_to: to,
        }
    }

    #[test]
    fn test_end_date_is_exclusive() {
        let mut rng = StdRng::seed_from_u64(3);
        let response = build_sales_overview_with(
            &mut rng,
            request(date(2024, 1, 1), date(2024, 1, 31)),
            &Config::default(),
        )
        .unwrap();

        assert_eq!(response.daily.len(), 30);
        assert_eq!(response.daily.first().map(|r| r.date), Some(date(2024, 1, 1)));
        assert_eq!(response.daily.last().map(|r| r.date), Some(date(2024, 1, 30)));
        assert_eq!(response.monthly.len(), 1);
        assert_eq!(
            response.range_label,
            "January 1st, 2024 - January 31st, 2024"
        );
    }

    #[test]
    fn test_month_boundary_range() {
        let response = build_sales_overview(
            request(date(2024, 1, 20), date(2024, 2, 10)),
            &Config::default(),
        )
        .unwrap();

        assert_eq!(response.daily.len(), 21);
        assert_eq!(response.monthly.len(), 2);
        let monthly_tx: u64 = response.monthly.iter().map(|m| m.transactions).sum();
        let daily_tx: u64 = response.daily.iter().map(|d| u64::from(d.transactions)).sum();
        assert_eq!(monthly_tx, daily_tx);
    }

    #[test]
    fn test_empty_and_reversed_ranges() {
        let config = Config::default();
        let same_day = build_sales_overview(request(date(2024, 1, 1), date(2024, 1, 1)), &config).unwrap();
        assert!(same_day.daily.is_empty());
        assert!(same_day.monthly.is_empty());

        let reversed = build_sales_overview(request(date(2024, 2, 1), date(2024, 1, 1)), &config).unwrap();
        assert!(reversed.daily.is_empty());
        assert!(reversed.monthly.is_empty());
    }

    #[test]
    fn test_range_limit() {
        let mut config = Config::default();
        config.dashboard.max_range_days = 10;

        let err = build_sales_overview(request(date(2024, 1, 1), date(2024, 1, 12)), &config).unwrap_err();
        assert_eq!(err, DashboardError::RangeTooLarge { days: 11, max: 10 });

        let ok = build_sales_overview(request(date(2024, 1, 1), date(2024, 1, 11)), &config).unwrap();
        assert_eq!(ok.daily.len(), 10);
    }

    #[test]
    fn test_invalid_generator_config_rejected() {
        let mut config = Config::default();
        config.generator.sales_max = config.generator.sales_min;
        let result = build_sales_overview(request(date(2024, 1, 1), date(2024, 1, 5)), &config);
        assert!(matches!(result, Err(DashboardError::InvalidConfig(_))));
    }

    #[test]
    fn test_default_range() {
        let range = default_range(date(2026, 10, 16), &Config::default());
        assert_eq!(range.date_from, date(2026, 9, 16));
        assert_eq!(range.date_to, date(2026, 10, 16));
    }
}
