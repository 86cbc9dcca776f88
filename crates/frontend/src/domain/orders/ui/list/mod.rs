pub mod state;

use self::state::{create_selection, create_state};
use crate::domain::orders::data::sample_orders;
use crate::domain::orders::ui::details::OrderDetailPanel;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::status_badge::status_badge;
use crate::shared::export::export_to_csv;
use crate::shared::format::{format_date, format_usd_cents};
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_indicator, SearchInput};
use contracts::domain::order::{Order, OrderStatus};
use contracts::shared::listview::apply;
use leptos::prelude::*;

pub fn order_status_tone(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Delivered => "success",
        OrderStatus::InTransit | OrderStatus::OutForDelivery => "info",
        OrderStatus::Processing => "warning",
        OrderStatus::Scheduled => "accent",
        OrderStatus::FailedDelivery => "danger",
        OrderStatus::Cancelled => "neutral",
    }
}

#[component]
pub fn OrdersList() -> impl IntoView {
    let state = create_state();
    let selection = create_selection();
    let orders = StoredValue::new(sample_orders());
    let (error, set_error) = signal::<Option<String>>(None);

    let visible_orders = move || apply(&orders.get_value(), &state.get());

    let selected_order = Signal::derive(move || {
        let sel = selection.get();
        sel.active().and_then(|id| {
            orders
                .get_value()
                .into_iter()
                .find(|order| order.id == id)
        })
    });

    let toggle_sort = move |field: &'static str| {
        move |_| state.update(|s| s.toggle_sort(field))
    };

    let export = move |_| {
        match export_to_csv(&orders.get_value(), "orders-export.csv") {
            Ok(()) => set_error.set(None),
            Err(e) => set_error.set(Some(format!("Export failed: {}", e))),
        }
    };

    let status_options: Vec<String> = OrderStatus::ALL.iter().map(|s| s.to_string()).collect();

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h2>"Orders"</h2>
                    <p class="header__description">"Manage and track all customer orders"</p>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=export>
                        {icon("download")}
                        "Export CSV"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="toolbar">
                <SearchInput
                    on_change=Callback::new(move |query: String| {
                        state.update(|s| s.set_search(query));
                    })
                    placeholder="Search orders..."
                />
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
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("id")>
                                    "Order ID" {move || sort_indicator(&state.get(), "id")}
                                </th>
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("customer")>
                                    "Customer" {move || sort_indicator(&state.get(), "customer")}
                                </th>
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("date")>
                                    "Date" {move || sort_indicator(&state.get(), "date")}
                                </th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell">"Driver"</th>
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("amount")>
                                    "Amount" {move || sort_indicator(&state.get(), "amount")}
                                </th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = visible_orders();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="6" class="table__empty">"No orders found."</td>
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
                                                    <td class="table__cell">
                                                        <div>{order.customer.clone()}</div>
                                                        <div class="table__cell-secondary">{order.address.clone()}</div>
                                                    </td>
                                                    <td class="table__cell">{format_date(order.date)}</td>
                                                    <td class="table__cell">
                                                        {status_badge(order.status.label(), order_status_tone(order.status))}
                                                    </td>
                                                    <td class="table__cell">
                                                        {order.driver.clone().unwrap_or_else(|| "Unassigned".into())}
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
                    order=selected_order
                    on_close=Callback::new(move |_| selection.update(|sel| sel.clear()))
                />
            </div>
        </div>
    }
}
