//! Sequential scraper batch runner plus the shopping-assistant record types.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod printer;
pub mod process;
pub mod registry;
pub mod sequencer;
pub mod types;
