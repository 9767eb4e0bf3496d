pub mod bulk_action_bar;
pub mod filter_panel;
pub mod indicator_set;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod ui;
