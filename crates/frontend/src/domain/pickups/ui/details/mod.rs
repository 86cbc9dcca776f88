use crate::domain::pickups::ui::list::pickup_status_tone;
use crate::shared::components::detail_row::detail_row;
use crate::shared::components::status_badge::status_badge;
use crate::shared::icons::icon;
use contracts::domain::pickup::Pickup;
use leptos::prelude::*;

#[component]
pub fn PickupDetailPanel(
    #[prop(into)] pickup: Signal<Option<Pickup>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="detail-panel">
            {move || match pickup.get() {
                None => view! {
                    <div class="detail-panel__empty">
                        {icon("clipboard")}
                        <p>"Select a pickup to see its details."</p>
                    </div>
                }
                .into_any(),
                Some(pickup) => view! {
                    <div class="detail-panel__card">
                        <div class="detail-panel__header">
                            <h3>{pickup.id.clone()}</h3>
                            <button
                                class="detail-panel__close"
                                title="Close"
                                on:click=move |_| on_close.run(())
                            >
                                {icon("x")}
                            </button>
                        </div>
                        <div class="detail-panel__status">
                            {status_badge(pickup.status.label(), pickup_status_tone(pickup.status))}
                        </div>
                        {detail_row("Driver", pickup.driver_name.clone())}
                        {detail_row("Phone", pickup.phone.clone())}
                        {detail_row("Vehicle", pickup.vehicle.clone())}
                        {detail_row("Scheduled", pickup.scheduled_time.clone())}
                        {pickup
                            .completed_time
                            .clone()
                            .map(|t| detail_row("Completed", t))}
                        {detail_row("Packages", pickup.packages.to_string())}
                        {pickup.eta.clone().map(|eta| detail_row("ETA", eta))}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
