//! Command implementations for reelctl CLI

pub mod lists;
pub mod rename;
pub mod search;

pub use lists::{run_page, run_remove};
pub use rename::run_rename;
pub use search::run_search;
