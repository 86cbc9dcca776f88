use contracts::shared::listview::ListViewState;
use contracts::shared::selection::Selection;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<ListViewState> {
    RwSignal::new(ListViewState::new())
}

pub fn create_selection() -> RwSignal<Selection> {
    RwSignal::new(Selection::new())
}
