//! Where the list screens get their records, settings and bulk action handling.

pub mod actions;
pub mod config;
pub mod services;
pub mod stores;
