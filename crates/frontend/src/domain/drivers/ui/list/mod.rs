pub mod state;

use self::state::{create_selection, create_state};
use crate::domain::drivers::data::sample_drivers;
use crate::domain::drivers::ui::details::DriverDetailPanel;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::status_badge::status_badge;
use crate::shared::export::export_to_csv;
use crate::shared::format::format_rating;
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_indicator, SearchInput};
use contracts::domain::driver::{Driver, DriverStatus};
use contracts::shared::listview::apply;
use leptos::prelude::*;

pub fn driver_status_tone(status: DriverStatus) -> &'static str {
    match status {
        DriverStatus::Active => "success",
        DriverStatus::OnBreak => "warning",
        DriverStatus::Inactive => "neutral",
    }
}

#[component]
pub fn DriversList() -> impl IntoView {
    let state = create_state();
    let selection = create_selection();
    let drivers = StoredValue::new(sample_drivers());
    let (error, set_error) = signal::<Option<String>>(None);

    let visible_drivers = move || apply(&drivers.get_value(), &state.get());

    let selected_driver = Signal::derive(move || {
        let sel = selection.get();
        sel.active().and_then(|id| {
            drivers
                .get_value()
                .into_iter()
                .find(|driver| driver.id == id)
        })
    });

    let toggle_sort = move |field: &'static str| {
        move |_| state.update(|s| s.toggle_sort(field))
    };

    let export = move |_| {
        match export_to_csv(&drivers.get_value(), "drivers-export.csv") {
            Ok(()) => set_error.set(None),
            Err(e) => set_error.set(Some(format!("Export failed: {}", e))),
        }
    };

    let status_options: Vec<String> = DriverStatus::ALL.iter().map(|s| s.to_string()).collect();

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h2>"Drivers"</h2>
                    <p class="header__description">"Fleet roster and availability"</p>
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
                    placeholder="Search drivers..."
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
                                    "Driver ID" {move || sort_indicator(&state.get(), "id")}
                                </th>
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                    "Name" {move || sort_indicator(&state.get(), "name")}
                                </th>
                                <th class="table__header-cell">"Vehicle"</th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("deliveries")>
                                    "Deliveries" {move || sort_indicator(&state.get(), "deliveries")}
                                </th>
                                <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("rating")>
                                    "Rating" {move || sort_indicator(&state.get(), "rating")}
                                </th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = visible_drivers();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="6" class="table__empty">"No drivers found."</td>
                                        </tr>
                                    }
                                    .into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|driver: Driver| {
                                            let row_id = driver.id.clone();
                                            let select_id = driver.id.clone();
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
                                                    <td class="table__cell table__cell--id">{driver.id.clone()}</td>
                                                    <td class="table__cell">
                                                        <div>{driver.name.clone()}</div>
                                                        <div class="table__cell-secondary">{driver.email.clone()}</div>
                                                    </td>
                                                    <td class="table__cell">{driver.vehicle.clone()}</td>
                                                    <td class="table__cell">
                                                        {status_badge(driver.status.label(), driver_status_tone(driver.status))}
                                                    </td>
                                                    <td class="table__cell table__cell--number">
                                                        {driver.deliveries.to_string()}
                                                    </td>
                                                    <td class="table__cell table__cell--number">
                                                        {format_rating(driver.rating)}
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

                <DriverDetailPanel
                    driver=selected_driver
                    on_close=Callback::new(move |_| selection.update(|sel| sel.clear()))
                />
            </div>
        </div>
    }
}
