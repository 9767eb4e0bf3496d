pub mod components;
pub mod data;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod list_state;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod page_frame;
pub mod page_standard;
