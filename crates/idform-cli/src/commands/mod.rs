//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;
pub mod templates;

mod document;
mod report;
