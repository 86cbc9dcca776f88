use leptos::prelude::*;

/// One label/value line inside a detail panel.
pub fn detail_row(label: &'static str, value: String) -> AnyView {
    view! {
        <div class="detail-row">
            <span class="detail-row__label">{label}</span>
            <span class="detail-row__value">{value}</span>
        </div>
    }
    .into_any()
}
