pub mod config;
pub mod indicators;
pub mod list_view;
