use contracts::shared::listview::FILTER_ALL;
use leptos::prelude::*;

/// Categorical filter dropdown with an "All" sentinel entry.
#[component]
pub fn FilterSelect(
    /// Current filter value ("all" when inactive)
    #[prop(into)]
    value: Signal<String>,
    /// Selectable values, in display order
    options: Vec<String>,
    /// Label of the sentinel entry, e.g. "All Statuses"
    #[prop(into)]
    all_label: String,
    /// Callback invoked with the chosen value (or "all")
    #[prop(into)]
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            prop:value=move || value.get()
            on:change=move |ev| {
                on_change.run(event_target_value(&ev));
            }
        >
            <option value=FILTER_ALL>{all_label}</option>
            {options
                .into_iter()
                .map(|opt| {
                    let val = opt.clone();
                    view! { <option value=val>{opt}</option> }
                })
                .collect_view()}
        </select>
    }
}
