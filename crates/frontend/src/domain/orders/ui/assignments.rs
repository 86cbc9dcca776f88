//! Driver workspace: the orders list scoped to one driver's assignments.
//!
//! The prototype has no authentication, so the signed-in driver is a
//! fixed persona.

use crate::domain::orders::data::sample_orders;
use crate::domain::orders::ui::details::OrderDetailPanel;
use crate::domain::orders::ui::list::order_status_tone;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::status_badge::status_badge;
use crate::shared::format::{format_date, format_usd_cents};
use contracts::domain::order::{Order, OrderStatus};
use contracts::shared::listview::{apply, ListViewState};
use contracts::shared::selection::Selection;
use leptos::prelude::*;

const SIGNED_IN_DRIVER: &str = "Michael R.";

#[component]
pub fn DriverAssignments() -> impl IntoView {
    let state = RwSignal::new(ListViewState::sorted_by("date"));
    let selection = RwSignal::new(Selection::new());

    let assignments: Vec<Order> = sample_orders()
        .into_iter()
        .filter(|order| order.driver.as_deref() == Some(SIGNED_IN_DRIVER))
        .collect();
    let assignments = StoredValue::new(assignments);

    let visible = move || apply(&assignments.get_value(), &state.get());

    let selected = Signal::derive(move || {
        let sel = selection.get();
        sel.active().and_then(|id| {
            assignments
                .get_value()
                .into_iter()
                .find(|order| order.id == id)
        })
    });

    let status_options: Vec<String> = OrderStatus::ALL.iter().map(|s| s.to_string()).collect();

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h2>"My Assignments"</h2>
                    <p class="header__description">
                        {format!("Deliveries assigned to {}", SIGNED_IN_DRIVER)}
                    </p>
                </div>
            </div>

            <div class="toolbar">
                <FilterSelect
                    value=Signal::derive(move || state.get().filter_value("status"))
                    options=status_options
                    all_label="All Statuses"
                    on_change=Callback::new(move |value: String| {
                        state.update(|s| s.set_filter("status", &value));
                    })
                />
            </div>

            <div class="list-detail">
                <div class="table-container">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Order ID"</th>
                                <th class="table__header-cell">"Address"</th>
                                <th class="table__header-cell">"Date"</th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell">"Amount"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = visible();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="5" class="table__empty">"No assignments found."</td>
                                        </tr>
                                    }
                                    .into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|order: Order| {
                                            let row_id = order.id.clone();
                                            let select_id = order.id.clone();
                                            view! {
                                                <tr
                                                    class="table__row"
                                                    class:table__row--selected=move || {
                                                        selection.get().is_selected(&row_id)
                                                    }
                                                    on:click=move |_| {
                                                        selection.update(|sel| sel.select(&select_id));
                                                    }
                                                >
                                                    <td class="table__cell table__cell--id">{order.id.clone()}</td>
                                                    <td class="table__cell">{order.address.clone()}</td>
                                                    <td class="table__cell">{format_date(order.date)}</td>
                                                    <td class="table__cell">
                                                        {status_badge(order.status.label(), order_status_tone(order.status))}
                                                    </td>
                                                    <td class="table__cell table__cell--number">
                                                        {format_usd_cents(order.amount_cents)}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </div>

                <OrderDetailPanel
                    order=selected
                    on_close=Callback::new(move |_| selection.update(|sel| sel.clear()))
                />
            </div>
        </div>
    }
}
