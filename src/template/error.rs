//! Error type for template construction and formatting.

use thiserror::Error;

/// Errors raised while parsing, validating, or filling a post template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A placeholder was referenced but no value was supplied for it.
    #[error("missing value for placeholder '{name}' at position {position} in template")]
    MissingField {
        /// The name of the placeholder without a value.
        name: String,
        /// Byte offset of the placeholder in the skeleton.
        position: usize,
    },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace {
        /// Byte offset of the unmatched `{`.
        position: usize,
    },

    /// An empty placeholder name was found (e.g., `{}`).
    #[error("empty placeholder name '{{}}' at position {position} in template")]
    EmptyPlaceholder {
        /// Byte offset of the empty placeholder.
        position: usize,
    },

    /// A link placeholder was declared that the skeleton never references.
    #[error("link placeholder '{name}' does not appear in the template")]
    UnknownLinkPlaceholder {
        /// The declared link placeholder name.
        name: String,
    },

    /// A placeholder appears more than once in the skeleton.
    #[error("placeholder '{name}' appears more than once in the template")]
    DuplicatePlaceholder {
        /// The repeated placeholder name.
        name: String,
    },

    /// A template was requested by a name nobody registered.
    #[error("unknown template '{name}' (available: {available})")]
    UnknownTemplate {
        /// The requested template name.
        name: String,
        /// Comma-separated list of registered names.
        available: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TemplateError::MissingField {
            name: "docket".to_string(),
            position: 14,
        };
        assert_eq!(
            err.to_string(),
            "missing value for placeholder 'docket' at position 14 in template"
        );

        let err = TemplateError::UnmatchedBrace { position: 5 };
        assert_eq!(err.to_string(), "unmatched '{' at position 5 in template");

        let err = TemplateError::EmptyPlaceholder { position: 3 };
        assert_eq!(
            err.to_string(),
            "empty placeholder name '{}' at position 3 in template"
        );

        let err = TemplateError::UnknownLinkPlaceholder {
            name: "pdf_link".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "link placeholder 'pdf_link' does not appear in the template"
        );
    }
}
