//! Data models: configuration, extractable fields and form templates.

pub mod config;
pub mod field;
pub mod template;
