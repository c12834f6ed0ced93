use chrono::Local;
use contracts::dashboards::d400_sales_overview::{SalesOverviewRequest, SalesOverviewResponse};
use contracts::shared::date_range::{trailing_range, DateRangeSelection};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::metric_card::{MetricCard, SeriesTable};
use crate::dashboards::d400_sales_overview::api;
use crate::dashboards::d400_sales_overview::series::{daily_series, monthly_series, Metric, SeriesRow};
use crate::shared::components::date_range_picker::DateRangePicker;

/// Range used when the server default cannot be loaded
const FALLBACK_RANGE_DAYS: u32 = 30;

/// Sales overview dashboard: range picker and six metric cards
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let selection = RwSignal::new(None::<DateRangeSelection>);

    // Data state
    let (data, set_data) = signal(None::<SalesOverviewResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let request_seq = StoredValue::new(0u64);

    // Load the default range on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let range = match api::get_default_range().await {
                Ok(range) => DateRangeSelection::new(range.date_from, range.date_to),
                Err(err) => {
                    log::warn!("Failed to load D400 default range: {}", err);
                    trailing_range(Local::now().date_naive(), FALLBACK_RANGE_DAYS)
                }
            };
            if selection.get_untracked().is_none() {
                selection.set(Some(range));
            }
        });
    });

    // Load data whenever the range is complete
    Effect::new(move |_| {
        let Some((date_from, date_to)) = selection.get().and_then(|s| s.as_range()) else {
            return;
        };

        request_seq.update_value(|seq| *seq += 1);
        let seq = request_seq.get_value();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::get_sales_overview(&SalesOverviewRequest { date_from, date_to }).await;

            // A newer range was requested meanwhile
            if request_seq.get_value() != seq {
                return;
            }

            match result {
                Ok(response) => {
                    set_data.set(Some(response));
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load D400 sales overview: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    let daily_rows = move |metric: Metric| -> Signal<Vec<SeriesRow>> {
        Signal::derive(move || {
            data.with(|d| {
                d.as_ref()
                    .map(|d| daily_series(&d.daily, metric))
                    .unwrap_or_default()
            })
        })
    };

    let monthly_rows = move |metric: Metric| -> Signal<Vec<SeriesRow>> {
        Signal::derive(move || {
            data.with(|d| {
                d.as_ref()
                    .map(|d| monthly_series(&d.monthly, metric))
                    .unwrap_or_default()
            })
        })
    };

    let on_select = Callback::new(move |next: DateRangeSelection| selection.set(Some(next)));

    view! {
        <div id="d400_sales_overview--dashboard" class="d400-dashboard">
            <div class="d400-header">
                <h1 class="d400-header__title">"E-commerce Data Visualization Dashboard"</h1>
                <p class="d400-header__subtitle">
                    "Visualize key metrics and trends for your e-commerce storefront."
                </p>
            </div>

            <div class="d400-toolbar">
                <DateRangePicker selection=selection on_select=on_select />
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="d400-loading">
                            <span>"Loading data..."</span>
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                if let Some(err) = error.get() {
                    view! {
                        <div class="d400-error">
                            <strong>"⚠ Error: "</strong>
                            {err}
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <div class="d400-grid">
                <MetricCard delay_ms=0 title="Daily Sales" description="Total sales per day">
                    <SeriesTable
                        period_label="Date"
                        value_label=Metric::Sales.label()
                        rows=daily_rows(Metric::Sales)
                    />
                </MetricCard>

                <MetricCard delay_ms=60 title="Monthly Sales" description="Total sales per month">
                    <SeriesTable
                        period_label="Month"
                        value_label=Metric::Sales.label()
                        rows=monthly_rows(Metric::Sales)
                    />
                </MetricCard>

                <MetricCard delay_ms=120 title="Transactions" description="Daily and monthly transactions">
                    <div class="d400-card__split">
                        <SeriesTable
                            period_label="Date"
                            value_label="Daily Transactions"
                            rows=daily_rows(Metric::Transactions)
                        />
                        <SeriesTable
                            period_label="Month"
                            value_label="Monthly Transactions"
                            rows=monthly_rows(Metric::Transactions)
                        />
                    </div>
                </MetricCard>

                <MetricCard delay_ms=180 title="Revenue Trends" description="Daily and monthly revenue">
                    <div class="d400-card__split">
                        <SeriesTable
                            period_label="Date"
                            value_label="Daily Revenue"
                            rows=daily_rows(Metric::Revenue)
                        />
                        <SeriesTable
                            period_label="Month"
                            value_label="Monthly Revenue"
                            rows=monthly_rows(Metric::Revenue)
                        />
                    </div>
                </MetricCard>

                <MetricCard delay_ms=240 title="Average Order Value (AOV)" description="Daily and monthly AOV">
                    <div class="d400-card__split">
                        <SeriesTable
                            period_label="Date"
                            value_label="Daily AOV"
                            rows=daily_rows(Metric::Aov)
                        />
                        <SeriesTable
                            period_label="Month"
                            value_label="Monthly AOV"
                            rows=monthly_rows(Metric::Aov)
                        />
                    </div>
                </MetricCard>

                <MetricCard delay_ms=300 title="Trend Analysis" description="Sales trend over time">
                    <SeriesTable
                        period_label="Date"
                        value_label="Sales Trend"
                        rows=daily_rows(Metric::Sales)
                    />
                </MetricCard>
            </div>
        </div>
    }
}
