pub mod detail_row;
pub mod filter_select;
pub mod stat_card;
pub mod status_badge;
