pub mod details;
pub mod filter;
pub mod list;
pub mod message;
pub mod notes;
pub mod segments;
