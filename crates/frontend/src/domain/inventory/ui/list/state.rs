use contracts::shared::listview::ListViewState;
use contracts::shared::selection::Selection;
use leptos::prelude::*;

/// Inventory opens alphabetized; the table is a lookup aid first.
pub fn create_state() -> RwSignal<ListViewState> {
    RwSignal::new(ListViewState::sorted_by("name"))
}

pub fn create_selection() -> RwSignal<Selection> {
    RwSignal::new(Selection::new())
}
