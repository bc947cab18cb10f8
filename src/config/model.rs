//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for docketpost.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Template settings
    // =========================================================================
    /// Character budget per post, applied to the built-in templates and to
    /// configured templates without their own budget.
    #[serde(default = "default_max_characters")]
    pub max_characters: usize,

    /// Additional templates keyed by name. A name equal to a built-in
    /// (`post`, `minute`) replaces it.
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateConfig>,

    // =========================================================================
    // Link settings
    // =========================================================================
    /// Root of the public docket pages.
    #[serde(default = "default_courtlistener_base_url")]
    pub courtlistener_base_url: String,

    /// Root of stored PDF documents.
    #[serde(default = "default_storage_base_url")]
    pub storage_base_url: String,

    // =========================================================================
    // Publisher settings
    // =========================================================================
    /// Command that publishes a post read from stdin. Unset means
    /// `notify` only works with `--dry-run`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_command: Option<String>,

    /// Seconds to wait for the publisher command.
    #[serde(default = "default_publish_timeout_seconds")]
    pub publish_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_characters: default_max_characters(),
            templates: BTreeMap::new(),
            courtlistener_base_url: default_courtlistener_base_url(),
            storage_base_url: default_storage_base_url(),
            publisher_command: None,
            publish_timeout_seconds: default_publish_timeout_seconds(),
        }
    }
}
