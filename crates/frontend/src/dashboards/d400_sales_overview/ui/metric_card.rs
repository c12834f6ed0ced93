use leptos::prelude::*;
use thaw::*;

use crate::dashboards::d400_sales_overview::series::SeriesRow;

/// Thaw [`Card`] with a title, a short description and a body.
///
/// Fades in with `card-appear`; `delay_ms` staggers neighbouring cards.
#[component]
pub fn MetricCard(
    title: &'static str,
    description: &'static str,
    #[prop(optional)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card attr:style=style>
            <div class="d400-card">
                <div class="d400-card__header">
                    <h2 class="d400-card__title">{title}</h2>
                    <p class="d400-card__description">{description}</p>
                </div>
                <div class="d400-card__body">{children()}</div>
            </div>
        </Card>
    }
}

/// Two column table: period and formatted value
#[component]
pub fn SeriesTable(
    period_label: &'static str,
    value_label: &'static str,
    #[prop(into)] rows: Signal<Vec<SeriesRow>>,
) -> impl IntoView {
    view! {
        <div class="d400-series">
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=120.0>{period_label}</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>{value_label}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <TableRow>
                                        <TableCell>{row.period}</TableCell>
                                        <TableCell class="text-right">{row.value}</TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
            {move || {
                if rows.with(|r| r.is_empty()) {
                    view! { <div class="d400-series__empty">"No data for the selected range"</div> }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
