//! CourtListener URL construction.

use super::{Docket, DocketEntry};

/// Default CourtListener site root.
pub const DEFAULT_COURTLISTENER_BASE_URL: &str = "https://www.courtlistener.com";

/// Default root for stored RECAP documents.
pub const DEFAULT_STORAGE_BASE_URL: &str = "https://storage.courtlistener.com";

/// Builds public links for dockets and documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    courtlistener_base: String,
    storage_base: String,
}

impl Default for Links {
    fn default() -> Self {
        Self::new(DEFAULT_COURTLISTENER_BASE_URL, DEFAULT_STORAGE_BASE_URL)
    }
}

impl Links {
    pub fn new(courtlistener_base: impl Into<String>, storage_base: impl Into<String>) -> Self {
        Self {
            courtlistener_base: courtlistener_base.into().trim_end_matches('/').to_string(),
            storage_base: storage_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Public page of a docket.
    pub fn docket_url(&self, docket: &Docket) -> String {
        format!("{}/docket/{}/", self.courtlistener_base, docket.id)
    }

    /// Direct link to the entry's PDF, when one has been stored.
    pub fn pdf_url(&self, entry: &DocketEntry) -> Option<String> {
        entry
            .filepath_local
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}/{}", self.storage_base, path.trim_start_matches('/')))
    }
}
