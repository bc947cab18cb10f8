//! Configuration model for docketpost.
//!
//! This module defines the Config struct that represents `config.yaml` in
//! the state directory. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), defaults for every field, and validation of values.
//! A missing config file means all defaults.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use types::TemplateConfig;
