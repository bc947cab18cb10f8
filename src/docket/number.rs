//! Federal docket number parsing.
//!
//! PACER docket numbers look like `1:09-cr-00466-4`: an optional office
//! prefix, a two-digit year, a case type, a sequence number, and for
//! multi-defendant criminal cases a defendant suffix. Each defendant gets
//! its own docket, so the suffix is what tells them apart. Trailing judge
//! initials (`-ABC`) are accepted and dropped.

use crate::error::{DocketPostError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DOCKET_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+):)?(\d{2})-([A-Za-z]{1,4})-(\d{1,6})(?:-(\d+))?(?:-[A-Za-z]{1,4})*$")
        .expect("Invalid docket number regex")
});

/// A parsed docket number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocketNumber {
    pub office: Option<u32>,
    pub year: String,
    pub case_type: String,
    pub sequence: String,
    pub defendant: Option<u32>,
}

impl DocketNumber {
    /// Parse a docket number such as `1:23-cv-00001` or `09-cr-466-4`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let caps = DOCKET_NUMBER_REGEX.captures(trimmed).ok_or_else(|| {
            DocketPostError::UserError(format!(
                "invalid docket number '{}'. Expected a form like '1:23-cv-00001'.",
                input
            ))
        })?;

        let office = caps.get(1).and_then(|m| m.as_str().parse().ok());
        let defendant = caps.get(5).and_then(|m| m.as_str().parse().ok());

        Ok(Self {
            office,
            year: caps[2].to_string(),
            case_type: caps[3].to_lowercase(),
            sequence: caps[4].to_string(),
            defendant,
        })
    }

    /// The number shared by every defendant of the case.
    pub fn without_defendant(&self) -> Self {
        Self {
            defendant: None,
            ..self.clone()
        }
    }
}

impl fmt::Display for DocketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(office) = self.office {
            write!(f, "{}:", office)?;
        }
        write!(f, "{}-{}-{}", self.year, self.case_type, self.sequence)?;
        if let Some(defendant) = self.defendant {
            write!(f, "-{}", defendant)?;
        }
        Ok(())
    }
}
