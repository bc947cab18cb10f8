//! Docket records from CourtListener.
//!
//! This module defines the docket and docket-entry records consumed by the
//! post composer, plus the helpers that go with them:
//!
//! - **court**: PACER ↔ CourtListener court id mapping
//! - **number**: docket number parsing
//! - **links**: public docket and PDF URLs
//! - **source**: where docket records come from
//!
//! Records deserialize straight from CourtListener API JSON. Unknown fields
//! are ignored.

mod court;
mod links;
mod number;
mod source;

pub use court::{map_cl_to_pacer_id, map_pacer_to_cl_id};
pub use links::{DEFAULT_COURTLISTENER_BASE_URL, DEFAULT_STORAGE_BASE_URL, Links};
pub use number::DocketNumber;
pub use source::{DocketSource, JsonDocketSource, read_json_file};

use serde::{Deserialize, Serialize};

/// A docket (case) as reported by CourtListener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Docket {
    /// CourtListener docket id.
    pub id: u64,

    pub case_name: String,

    #[serde(default)]
    pub docket_number: String,

    /// CourtListener court id (e.g. `nysd`).
    pub court_id: String,

    /// PACER's case id; the key subscriptions are stored under.
    #[serde(default)]
    pub pacer_case_id: Option<String>,
}

impl Docket {
    /// Name used in posts: `Case Name (1:23-cv-00001)`.
    pub fn display_name(&self) -> String {
        if self.docket_number.is_empty() {
            self.case_name.clone()
        } else {
            format!("{} ({})", self.case_name, self.docket_number)
        }
    }

    /// PACER court id for this docket's court.
    pub fn pacer_court_id(&self) -> &str {
        map_cl_to_pacer_id(&self.court_id)
    }
}

/// One entry on a docket, optionally with a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocketEntry {
    pub document_number: String,

    #[serde(default)]
    pub attachment_number: Option<u32>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub short_description: String,

    /// Storage path of the PDF, relative to the storage root.
    #[serde(default)]
    pub filepath_local: Option<String>,
}

impl DocketEntry {
    /// Document number as shown in posts (`12`, or `12-3` for attachments).
    pub fn display_number(&self) -> String {
        match self.attachment_number {
            Some(attachment) => format!("{}-{}", self.document_number, attachment),
            None => self.document_number.clone(),
        }
    }

    /// Text for the post body; falls back to the short description.
    pub fn text(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.short_description
        } else {
            &self.description
        }
    }
}
