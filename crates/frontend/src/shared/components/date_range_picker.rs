//! Date range picker: a button with the current range and a calendar popover
//!
//! The popover shows `number_of_months` consecutive months. Clicking days
//! follows [`DateRangeSelection::select`]; a mouse press outside the picker
//! closes the popover.

use chrono::{Datelike, Local, NaiveDate};
use contracts::shared::calendar::{visible_months, DayState, MonthGrid, WEEKDAY_LABELS};
use contracts::shared::date_range::{format_range_label, DateRangeSelection};
use contracts::shared::year_month::YearMonth;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// CSS classes for a day cell
fn day_class(state: DayState) -> String {
    let mut classes = vec!["calendar-day"];
    if state.selected {
        classes.push("calendar-day--selected");
    } else if state.in_range {
        classes.push("calendar-day--in-range");
    }
    if state.today {
        classes.push("calendar-day--today");
    }
    classes.join(" ")
}

#[component]
pub fn DateRangePicker(
    /// Current selection, `None` until a range is known
    #[prop(into)]
    selection: Signal<Option<DateRangeSelection>>,

    /// Called with the new selection after every day click
    on_select: Callback<DateRangeSelection>,

    /// Months shown side by side
    #[prop(optional, default = 2)]
    number_of_months: usize,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let today = Local::now().date_naive();
    let first_month = RwSignal::new(YearMonth::from_date(today));
    let picker_ref = NodeRef::<leptos::html::Div>::new();

    let label = move || format_range_label(selection.get().as_ref());

    let on_toggle = move |_| {
        if !is_open.get_untracked() {
            let anchor = selection
                .get_untracked()
                .unwrap_or_default()
                .anchor_month(today);
            first_month.set(anchor);
        }
        is_open.update(|open| *open = !*open);
    };

    let on_pick = Callback::new(move |day: NaiveDate| {
        let next = selection.get_untracked().unwrap_or_default().select(day);
        on_select.run(next);
    });

    let on_previous = move |_| {
        if let Some(month) = first_month.get_untracked().pred() {
            first_month.set(month);
        }
    };

    let on_next = move |_| {
        if let Some(month) = first_month.get_untracked().succ() {
            first_month.set(month);
        }
    };

    // Close the popover on a mouse press outside the picker
    let _ = window_event_listener(leptos::ev::mousedown, move |ev: leptos::ev::MouseEvent| {
        if !is_open.get_untracked() {
            return;
        }
        let Some(container) = picker_ref.get_untracked() else {
            return;
        };
        let target = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !container.contains(target.as_ref()) {
            is_open.set(false);
        }
    });

    view! {
        <div class="date-range-picker" node_ref=picker_ref>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=on_toggle
                attr:id="date"
                attr:style="width: 300px; justify-content: flex-start;"
            >
                {label}
            </Button>

            <Show when=move || is_open.get()>
                <div class="date-range-picker__popover">
                    <div class="date-range-picker__months">
                        {move || {
                            visible_months(first_month.get(), number_of_months)
                                .into_iter()
                                .map(|month| view! {
                                    <CalendarMonth
                                        month=month
                                        selection=selection
                                        today=today
                                        on_pick=on_pick
                                    />
                                })
                                .collect_view()
                        }}
                    </div>
                    <div class="date-range-picker__nav">
                        <Button appearance=ButtonAppearance::Subtle on_click=on_previous>
                            "Previous Month"
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=on_next>
                            "Next Month"
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// One month of the calendar as a 6x7 table
#[component]
fn CalendarMonth(
    month: YearMonth,
    #[prop(into)] selection: Signal<Option<DateRangeSelection>>,
    today: NaiveDate,
    on_pick: Callback<NaiveDate>,
) -> impl IntoView {
    let grid = MonthGrid::new(month);
    let title = grid.title();
    let weeks = *grid.weeks();

    view! {
        <div class="calendar-month">
            <h3 class="calendar-month__title">{title}</h3>
            <table class="calendar-month__grid">
                <thead>
                    <tr>
                        {WEEKDAY_LABELS
                            .iter()
                            .map(|label| view! { <th>{*label}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {weeks
                        .into_iter()
                        .map(|week| {
                            view! {
                                <tr>
                                    {week
                                        .into_iter()
                                        .map(|cell| match cell {
                                            None => {
                                                view! { <td class="calendar-day calendar-day--empty"></td> }
                                                    .into_any()
                                            }
                                            Some(day) => {
                                                let class = move || {
                                                    let current = selection.get().unwrap_or_default();
                                                    day_class(DayState::of(day, &current, today))
                                                };
                                                view! {
                                                    <td class=class on:click=move |_| on_pick.run(day)>
                                                        {day.day()}
                                                    </td>
                                                }
                                                    .into_any()
                                            }
                                        })
                                        .collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_class() {
        assert_eq!(day_class(DayState::default()), "calendar-day");
        assert_eq!(
            day_class(DayState {
                selected: true,
                in_range: true,
                today: false
            }),
            "calendar-day calendar-day--selected"
        );
        assert_eq!(
            day_class(DayState {
                selected: false,
                in_range: true,
                today: true
            }),
            "calendar-day calendar-day--in-range calendar-day--today"
        );
    }
}
