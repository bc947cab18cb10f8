//! Post templating with a character budget.
//!
//! This module provides:
//!
//! - **Skeleton**: `{name}` substitution that fails on missing values
//! - **PostTemplate**: budget accounting with fixed-width links and
//!   truncation of a single field
//! - **Built-ins**: the filing and minute-entry templates, and a registry
//!   that resolves templates by name
//!
//! # Template Syntax
//!
//! ```text
//! New filing in {docket}
//! Doc #{doc_num}: {description}
//!
//! PDF: {pdf_link}
//! Docket: {docket_link}
//! ```
//!
//! Use `{{` to escape and render a literal `{`.

mod builtin;
mod error;
mod post;
mod skeleton;
mod truncate;

pub use builtin::{
    MINUTE, MINUTE_SKELETON, MINUTE_TEMPLATE, POST, POST_SKELETON, POST_TEMPLATE, TemplateRegistry,
};
pub use error::TemplateError;
pub use post::{DEFAULT_MAX_CHARACTERS, DEFAULT_TRUNCATABLE, LINK_CHARACTER_COST, PostTemplate};
pub use skeleton::{FormatValues, placeholders, render_template, values};
pub use truncate::{ELLIPSIS, truncate};
