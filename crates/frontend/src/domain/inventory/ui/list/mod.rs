pub mod state;

use self::state::{create_selection, create_state};
use crate::domain::inventory::data::{sample_inventory, CATEGORIES};
use crate::domain::inventory::ui::details::InventoryDetailPanel;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::status_badge::status_badge;
use crate::shared::export::export_to_csv;
use crate::shared::format::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_indicator, SearchInput};
use contracts::domain::inventory::{InventoryItem, StockStatus};
use contracts::shared::listview::apply;
use leptos::prelude::*;

pub fn stock_status_tone(status: StockStatus) -> &'static str {
    match status {
        StockStatus::InStock => "success",
        StockStatus::LowStock => "danger",
    }
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let state = create_state();
    let selection = create_selection();
    let items = StoredValue::new(sample_inventory());
    let (error, set_error) = signal::<Option<String>>(None);

    let visible_items = move || apply(&items.get_value(), &state.get());

    let selected_item = Signal::derive(move || {
        let sel = selection.get();
        sel.active()
            .and_then(|id| items.get_value().into_iter().find(|item| item.id == id))
    });

    let toggle_sort = move |field: &'static str| {
        move |_| state.update(|s| s.toggle_sort(field))
    };

    let export = move |_| {
        match export_to_csv(&items.get_value(), "inventory-export.csv") {
            Ok(()) => set_error.set(None),
            Err(e) => set_error.set(Some(format!("Export failed: {}", e))),
        }
    };

    let category_options: Vec<String> = CATEGORIES.iter().map(|c| c.to_string()).collect();
    let status_options: Vec<String> = StockStatus::ALL.iter().map(|s| s.to_string()).collect();

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h2>"Inventory"</h2>
                    <p class="header__description">"Warehouse stock levels and locations"</p>
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
                    placeholder="Search inventory..."
                />
                <FilterSelect
                    value=Signal::derive(move || state.get().filter_value("category"))
                    options=category_options
                    all_label="All Categories"
                    on_change=Callback::new(move |value: String| {
                        state.update(|s| s.set_filter("category", &value));
                    })
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
                                    "Item ID" {move || sort_indicator(&state.get(), "id")}
                                </th>
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                    "Name" {move || sort_indicator(&state.get(), "name")}
                                </th>
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("category")>
                                    "Category" {move || sort_indicator(&state.get(), "category")}
                                </th>
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("quantity")>
                                    "Stock" {move || sort_indicator(&state.get(), "quantity")}
                                </th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("last_updated")>
                                    "Updated" {move || sort_indicator(&state.get(), "last_updated")}
                                </th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = visible_items();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="6" class="table__empty">"No inventory items found."</td>
                                        </tr>
                                    }
                                    .into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|item: InventoryItem| {
                                            let row_id = item.id.clone();
                                            let select_id = item.id.clone();
                                            let percent = item.stock_level_percent();
                                            let status = item.status();
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
                                                    <td class="table__cell table__cell--id">{item.id.clone()}</td>
                                                    <td class="table__cell">
                                                        <div>{item.name.clone()}</div>
                                                        <div class="table__cell-secondary">{item.location.clone()}</div>
                                                    </td>
                                                    <td class="table__cell">{item.category.clone()}</td>
                                                    <td class="table__cell">
                                                        <div class="stock-bar">
                                                            <div
                                                                class="stock-bar__fill"
                                                                class:stock-bar__fill--low=status == StockStatus::LowStock
                                                                style=format!("width: {}%", percent)
                                                            ></div>
                                                        </div>
                                                        <div class="table__cell-secondary">
                                                            {format!("{} / min {}", item.quantity, item.min_quantity)}
                                                        </div>
                                                    </td>
                                                    <td class="table__cell">
                                                        {status_badge(status.label(), stock_status_tone(status))}
                                                    </td>
                                                    <td class="table__cell">{format_date(item.last_updated)}</td>
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

                <InventoryDetailPanel
                    item=selected_item
                    on_close=Callback::new(move |_| selection.update(|sel| sel.clear()))
                />
            </div>
        </div>
    }
}
