//! Utility functions shared across CLI commands.

mod catalog;
pub mod ui;

pub use catalog::{is_catalog, list_catalogs, resource_of, to_language};
