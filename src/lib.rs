//! showfinder: a terminal form whose fields autocomplete against a
//! suggestion server (`GET /autocomplete/{endpoint}?q=...`).

pub mod app;
pub mod autocomplete;
pub mod config;
pub mod error;
pub mod fetch;
pub mod layout;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use app::{App, OutputMode};
pub use config::{Config, ConfigResult, load_config};
