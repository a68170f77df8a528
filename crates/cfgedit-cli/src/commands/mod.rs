//! Command implementations for cfgedit-cli

pub mod edit;
pub mod show;

pub use edit::{run_encode, run_new, run_remove, run_set};
pub use show::{run_show, run_show_all};
