//! Error types for docketpost.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for docketpost operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum DocketPostError {
    /// User provided invalid arguments, input files, or configuration.
    #[error("{0}")]
    UserError(String),

    /// A template could not be built or filled.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// The publisher failed to create a post.
    #[error("Publish failed: {0}")]
    PublishError(String),

    /// The subscription store could not be read or written.
    #[error("Subscription store error: {0}")]
    StoreError(String),
}

impl DocketPostError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DocketPostError::UserError(_) => exit_codes::USER_ERROR,
            DocketPostError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            DocketPostError::PublishError(_) => exit_codes::PUBLISH_FAILURE,
            DocketPostError::StoreError(_) => exit_codes::STORE_FAILURE,
        }
    }
}

/// Result type alias for docketpost operations.
pub type Result<T> = std::result::Result<T, DocketPostError>;
