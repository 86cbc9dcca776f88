use crate::domain::orders::ui::list::order_status_tone;
use crate::shared::components::detail_row::detail_row;
use crate::shared::components::status_badge::status_badge;
use crate::shared::format::{format_date, format_usd_cents};
use crate::shared::icons::icon;
use contracts::domain::order::Order;
use leptos::prelude::*;

/// Read-only projection of the selected order, or a placeholder when no
/// row is selected.
#[component]
pub fn OrderDetailPanel(
    #[prop(into)] order: Signal<Option<Order>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="detail-panel">
            {move || match order.get() {
                None => view! {
                    <div class="detail-panel__empty">
                        {icon("package")}
                        <p>"Select an order to see its details."</p>
                    </div>
                }
                .into_any(),
                Some(order) => view! {
                    <div class="detail-panel__card">
                        <div class="detail-panel__header">
                            <h3>{order.id.clone()}</h3>
                            <button
                                class="detail-panel__close"
                                title="Close"
                                on:click=move |_| on_close.run(())
                            >
                                {icon("x")}
                            </button>
                        </div>
                        <div class="detail-panel__status">
                            {status_badge(order.status.label(), order_status_tone(order.status))}
                        </div>
                        {detail_row("Customer", order.customer.clone())}
                        {detail_row("Address", order.address.clone())}
                        {detail_row("Date", format_date(order.date))}
                        {detail_row(
                            "Driver",
                            order.driver.clone().unwrap_or_else(|| "Unassigned".into()),
                        )}
                        {detail_row("Amount", format_usd_cents(order.amount_cents))}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
