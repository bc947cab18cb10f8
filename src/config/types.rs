//! Configuration types and defaults for docketpost.

use crate::docket::{DEFAULT_COURTLISTENER_BASE_URL, DEFAULT_STORAGE_BASE_URL};
use crate::publish::DEFAULT_PUBLISH_TIMEOUT_SECONDS;
use crate::template::DEFAULT_MAX_CHARACTERS;
use serde::{Deserialize, Serialize};

/// A template defined in `config.yaml`.
///
/// ```yaml
/// templates:
///   order:
///     template: "Order in {docket}: {description}\n{docket_link}"
///     link_placeholders: [docket_link]
///     max_characters: 280
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Skeleton with `{name}` placeholders.
    pub template: String,

    /// Placeholders charged at the fixed link width.
    #[serde(default)]
    pub link_placeholders: Vec<String>,

    /// Budget for this template; falls back to the global `max_characters`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_characters: Option<usize>,

    /// Placeholder to truncate; defaults to `description`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncatable: Option<String>,
}

// Default value functions for serde
pub(super) fn default_max_characters() -> usize {
    DEFAULT_MAX_CHARACTERS
}
pub(super) fn default_courtlistener_base_url() -> String {
    DEFAULT_COURTLISTENER_BASE_URL.to_string()
}
pub(super) fn default_storage_base_url() -> String {
    DEFAULT_STORAGE_BASE_URL.to_string()
}
pub(super) fn default_publish_timeout_seconds() -> u64 {
    DEFAULT_PUBLISH_TIMEOUT_SECONDS
}
