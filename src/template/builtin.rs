//! Built-in templates and the name registry.

use super::error::TemplateError;
use super::post::PostTemplate;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Skeleton for a filing that has a document attached.
pub const POST_SKELETON: &str = "New filing in {docket}
Doc #{doc_num}: {description}

PDF: {pdf_link}
Docket: {docket_link}";

/// Skeleton for a minute entry (no document).
pub const MINUTE_SKELETON: &str = "New minute entry in {docket}: {description}";

/// Template for filings with a document.
pub static POST_TEMPLATE: LazyLock<PostTemplate> = LazyLock::new(|| {
    PostTemplate::new(POST_SKELETON, ["pdf_link", "docket_link"])
        .expect("built-in post template is well-formed")
});

/// Template for minute entries.
pub static MINUTE_TEMPLATE: LazyLock<PostTemplate> = LazyLock::new(|| {
    PostTemplate::new(MINUTE_SKELETON, Vec::<String>::new())
        .expect("built-in minute template is well-formed")
});

/// Registry name of [`POST_TEMPLATE`].
pub const POST: &str = "post";

/// Registry name of [`MINUTE_TEMPLATE`].
pub const MINUTE: &str = "minute";

/// Templates addressable by name.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, PostTemplate>,
}

impl TemplateRegistry {
    /// A registry holding only the built-in templates.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        registry.insert(POST, POST_TEMPLATE.clone());
        registry.insert(MINUTE, MINUTE_TEMPLATE.clone());
        registry
    }

    /// Register a template, replacing any previous one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, template: PostTemplate) {
        self.templates.insert(name.into(), template);
    }

    /// Look up a template by name.
    pub fn get(&self, name: &str) -> Result<&PostTemplate, TemplateError> {
        self.templates
            .get(name)
            .ok_or_else(|| TemplateError::UnknownTemplate {
                name: name.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostTemplate)> {
        self.templates.iter().map(|(k, v)| (k.as_str(), v))
    }
}
