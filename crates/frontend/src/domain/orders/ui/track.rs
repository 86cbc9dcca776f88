//! Customer workspace: order lookup with a delivery-progress timeline.

use crate::domain::orders::data::sample_orders;
use crate::shared::components::detail_row::detail_row;
use crate::shared::format::{format_date, format_usd_cents};
use crate::shared::icons::icon;
use contracts::domain::order::{Order, OrderStatus};
use leptos::prelude::*;

const TIMELINE_STEPS: [&str; 4] = ["Processing", "In Transit", "Out for Delivery", "Delivered"];

/// Number of completed timeline steps for a status. Terminal failures
/// freeze the timeline where the order stopped.
fn completed_steps(status: OrderStatus) -> usize {
    match status {
        OrderStatus::Scheduled => 0,
        OrderStatus::Processing => 1,
        OrderStatus::InTransit => 2,
        OrderStatus::OutForDelivery => 3,
        OrderStatus::Delivered => 4,
        OrderStatus::FailedDelivery => 3,
        OrderStatus::Cancelled => 1,
    }
}

#[component]
pub fn TrackOrderPage() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (result, set_result) = signal::<Option<Result<Order, String>>>(None);

    let lookup = move || {
        let id = query.get().trim().to_string();
        if id.is_empty() {
            set_result.set(None);
            return;
        }
        let found = sample_orders()
            .into_iter()
            .find(|order| order.id.eq_ignore_ascii_case(&id));
        match found {
            Some(order) => set_result.set(Some(Ok(order))),
            None => set_result.set(Some(Err(format!(
                "No order found with ID \"{}\". Check the ID and try again.",
                id
            )))),
        }
    };

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h2>"Track Order"</h2>
                    <p class="header__description">"Enter your order ID to see delivery progress"</p>
                </div>
            </div>

            <div class="toolbar">
                <div class="search-input">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="e.g. ORD-1234"
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                lookup();
                            }
                        }
                    />
                </div>
                <button class="button button--primary" on:click=move |_| lookup()>
                    "Track"
                </button>
            </div>

            {move || match result.get() {
                None => view! {
                    <div class="empty-state">
                        {icon("map-pin")}
                        <p>"Your delivery timeline will appear here."</p>
                    </div>
                }
                .into_any(),
                Some(Err(message)) => view! {
                    <div class="error">
                        {icon("alert-triangle")}
                        {message}
                    </div>
                }
                .into_any(),
                Some(Ok(order)) => {
                    let done = completed_steps(order.status);
                    let failed = order.status.is_terminal_failure();
                    view! {
                        <div class="track-result">
                            {failed.then(|| view! {
                                <div class="error">
                                    {icon("alert-triangle")}
                                    {format!("This order was not delivered: {}.", order.status.label())}
                                </div>
                            })}

                            <div class="timeline">
                                {TIMELINE_STEPS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, step)| {
                                        let completed = i < done && !(failed && i + 1 == done);
                                        let current = !failed && i + 1 == done;
                                        view! {
                                            <div
                                                class="timeline__step"
                                                class:timeline__step--done=completed
                                                class:timeline__step--current=current
                                            >
                                                {if completed {
                                                    icon("check-circle")
                                                } else {
                                                    icon("clock")
                                                }}
                                                <span>{*step}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <div class="detail-panel__card">
                                {detail_row("Order ID", order.id.clone())}
                                {detail_row("Customer", order.customer.clone())}
                                {detail_row("Delivery address", order.address.clone())}
                                {detail_row("Order date", format_date(order.date))}
                                {detail_row("Status", order.status.to_string())}
                                {detail_row("Amount", format_usd_cents(order.amount_cents))}
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
