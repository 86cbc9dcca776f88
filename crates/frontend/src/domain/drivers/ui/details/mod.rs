use crate::domain::drivers::ui::list::driver_status_tone;
use crate::shared::components::detail_row::detail_row;
use crate::shared::components::status_badge::status_badge;
use crate::shared::format::format_rating;
use crate::shared::icons::icon;
use contracts::domain::driver::Driver;
use leptos::prelude::*;

#[component]
pub fn DriverDetailPanel(
    #[prop(into)] driver: Signal<Option<Driver>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="detail-panel">
            {move || match driver.get() {
                None => view! {
                    <div class="detail-panel__empty">
                        {icon("user")}
                        <p>"Select a driver to see their details."</p>
                    </div>
                }
                .into_any(),
                Some(driver) => view! {
                    <div class="detail-panel__card">
                        <div class="detail-panel__header">
                            <h3>{driver.name.clone()}</h3>
                            <button
                                class="detail-panel__close"
                                title="Close"
                                on:click=move |_| on_close.run(())
                            >
                                {icon("x")}
                            </button>
                        </div>
                        <div class="detail-panel__status">
                            {status_badge(driver.status.label(), driver_status_tone(driver.status))}
                        </div>
                        {detail_row("Driver ID", driver.id.clone())}
                        {detail_row("Phone", driver.phone.clone())}
                        {detail_row("Email", driver.email.clone())}
                        {detail_row("Vehicle", driver.vehicle.clone())}
                        {detail_row(
                            "Current location",
                            driver
                                .location
                                .map(|p| format!("{:.4}, {:.4}", p.lat, p.lng))
                                .unwrap_or_else(|| "Unknown".into()),
                        )}
                        {detail_row("Deliveries today", driver.deliveries.to_string())}
                        {detail_row("Rating", format_rating(driver.rating))}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
