//! Shared command flows

pub mod list;

pub use list::run_list_command;
