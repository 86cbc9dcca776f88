use leptos::prelude::*;

/// Colored status chip. `tone` is one of: success, info, warning,
/// danger, accent, neutral.
pub fn status_badge(label: &str, tone: &'static str) -> AnyView {
    let class = format!("badge badge--{}", tone);
    let label = label.to_string();
    view! { <span class=class>{label}</span> }.into_any()
}
