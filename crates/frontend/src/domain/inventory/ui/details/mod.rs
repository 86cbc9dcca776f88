use crate::domain::inventory::ui::list::stock_status_tone;
use crate::shared::components::detail_row::detail_row;
use crate::shared::components::status_badge::status_badge;
use crate::shared::format::format_date;
use crate::shared::icons::icon;
use contracts::domain::inventory::InventoryItem;
use leptos::prelude::*;

#[component]
pub fn InventoryDetailPanel(
    #[prop(into)] item: Signal<Option<InventoryItem>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="detail-panel">
            {move || match item.get() {
                None => view! {
                    <div class="detail-panel__empty">
                        {icon("boxes")}
                        <p>"Select an item to see its details."</p>
                    </div>
                }
                .into_any(),
                Some(item) => {
                    let status = item.status();
                    view! {
                        <div class="detail-panel__card">
                            <div class="detail-panel__header">
                                <h3>{item.name.clone()}</h3>
                                <button
                                    class="detail-panel__close"
                                    title="Close"
                                    on:click=move |_| on_close.run(())
                                >
                                    {icon("x")}
                                </button>
                            </div>
                            <div class="detail-panel__status">
                                {status_badge(status.label(), stock_status_tone(status))}
                            </div>
                            {detail_row("Item ID", item.id.clone())}
                            {detail_row("Category", item.category.clone())}
                            {detail_row("Location", item.location.clone())}
                            {detail_row("Quantity on hand", item.quantity.to_string())}
                            {detail_row("Reorder threshold", item.min_quantity.to_string())}
                            {detail_row("Stock level", format!("{}%", item.stock_level_percent()))}
                            {detail_row("Last updated", format_date(item.last_updated))}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
