pub mod state;

use self::state::{create_selection, create_state, ScheduleGroup};
use crate::domain::pickups::data::{completed_pickups, todays_pickups, upcoming_pickups};
use crate::domain::pickups::ui::details::PickupDetailPanel;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::status_badge::status_badge;
use crate::shared::list_utils::SearchInput;
use contracts::domain::pickup::{Pickup, PickupStatus};
use contracts::shared::listview::apply;
use leptos::prelude::*;

pub fn pickup_status_tone(status: PickupStatus) -> &'static str {
    match status {
        PickupStatus::Arrived => "success",
        PickupStatus::EnRoute => "info",
        PickupStatus::Scheduled => "accent",
        PickupStatus::Completed => "neutral",
    }
}

#[component]
pub fn PickupsList() -> impl IntoView {
    let state = create_state();
    let selection = create_selection();
    let group = RwSignal::new(ScheduleGroup::Today);

    let pickups_for = move |g: ScheduleGroup| match g {
        ScheduleGroup::Today => todays_pickups(),
        ScheduleGroup::Upcoming => upcoming_pickups(),
        ScheduleGroup::Completed => completed_pickups(),
    };

    let visible_pickups = move || apply(&pickups_for(group.get()), &state.get());

    let selected_pickup = Signal::derive(move || {
        let sel = selection.get();
        sel.active().and_then(|id| {
            pickups_for(group.get())
                .into_iter()
                .find(|pickup| pickup.id == id)
        })
    });

    let status_options: Vec<String> = PickupStatus::ALL.iter().map(|s| s.to_string()).collect();

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h2>"Pickups"</h2>
                    <p class="header__description">"Driver pickup schedule at the warehouse"</p>
                </div>
            </div>

            <div class="group-tabs">
                {ScheduleGroup::ALL
                    .iter()
                    .map(|g| {
                        let g = *g;
                        view! {
                            <button
                                class="group-tabs__item"
                                class:group-tabs__item--active=move || group.get() == g
                                on:click=move |_| {
                                    group.set(g);
                                    // a row from another group cannot stay selected
                                    selection.update(|sel| sel.clear());
                                }
                            >
                                {g.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="toolbar">
                <SearchInput
                    on_change=Callback::new(move |query: String| {
                        state.update(|s| s.set_search(query));
                    })
                    placeholder="Search pickups..."
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
                                <th class="table__header-cell">"Pickup ID"</th>
                                <th class="table__header-cell">"Driver"</th>
                                <th class="table__header-cell">"Vehicle"</th>
                                <th class="table__header-cell">"Scheduled"</th>
                                <th class="table__header-cell">"Packages"</th>
                                <th class="table__header-cell">"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = visible_pickups();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="6" class="table__empty">"No pickups found."</td>
                                        </tr>
                                    }
                                    .into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|pickup: Pickup| {
                                            let row_id = pickup.id.clone();
                                            let select_id = pickup.id.clone();
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
                                                    <td class="table__cell table__cell--id">{pickup.id.clone()}</td>
                                                    <td class="table__cell">{pickup.driver_name.clone()}</td>
                                                    <td class="table__cell">{pickup.vehicle.clone()}</td>
                                                    <td class="table__cell">{pickup.scheduled_time.clone()}</td>
                                                    <td class="table__cell table__cell--number">
                                                        {pickup.packages.to_string()}
                                                    </td>
                                                    <td class="table__cell">
                                                        {status_badge(pickup.status.label(), pickup_status_tone(pickup.status))}
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

                <PickupDetailPanel
                    pickup=selected_pickup
                    on_close=Callback::new(move |_| selection.update(|sel| sel.clear()))
                />
            </div>
        </div>
    }
}
