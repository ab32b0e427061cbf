//! Command implementations for uix-cli

pub mod check;
pub mod find;
pub mod list;

pub use check::run_check;
pub use find::run_find;
pub use list::{run_apps, run_bundles, run_links};
