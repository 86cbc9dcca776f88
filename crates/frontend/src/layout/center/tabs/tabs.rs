use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::registry::render_page_content;
use leptos::prelude::*;

/// One opened page. The content is created once and kept alive while the
/// tab stays open; switching tabs only toggles visibility, so page-local
/// filter and selection state survives tab switches.
#[component]
fn TabPage(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let tab_key_for_active_check = tab.key.clone();
    let is_active = move || tabs_store.active.get().as_deref() == Some(&tab_key_for_active_check);

    let content = render_page_content(&tab.key);

    view! {
        <div class="tab-page" class:hidden=move || !is_active()>
            {content}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabComponent tab=tab /> }
                    }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! { <TabPage tab=tab /> }
                    }
                />
            </div>
        </div>
    }
}
