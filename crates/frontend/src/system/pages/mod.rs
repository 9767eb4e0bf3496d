pub mod help;
pub mod settings;
