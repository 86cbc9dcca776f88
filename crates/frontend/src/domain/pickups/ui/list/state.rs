use contracts::shared::listview::ListViewState;
use contracts::shared::selection::Selection;
use leptos::prelude::*;

/// Which slice of the schedule the page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleGroup {
    Today,
    Upcoming,
    Completed,
}

impl ScheduleGroup {
    pub const ALL: [ScheduleGroup; 3] = [
        ScheduleGroup::Today,
        ScheduleGroup::Upcoming,
        ScheduleGroup::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScheduleGroup::Today => "Today",
            ScheduleGroup::Upcoming => "Upcoming",
            ScheduleGroup::Completed => "Completed",
        }
    }
}

pub fn create_state() -> RwSignal<ListViewState> {
    RwSignal::new(ListViewState::new())
}

pub fn create_selection() -> RwSignal<Selection> {
    RwSignal::new(Selection::new())
}
