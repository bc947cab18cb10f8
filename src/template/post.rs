//! Character-budget-aware post templates.
//!
//! A [`PostTemplate`] knows how many characters its skeleton costs before
//! any values are substituted. Link placeholders are charged a fixed
//! [`LINK_CHARACTER_COST`] no matter what URL is supplied, since the target
//! platform displays every link at that width. When a post would overflow
//! the budget, only the truncatable field (normally `description`) is
//! shortened.

use super::error::TemplateError;
use super::skeleton::{self, FormatValues, Segment};
use super::truncate::{ELLIPSIS, truncate};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Characters charged for every link placeholder.
pub const LINK_CHARACTER_COST: usize = 23;

/// Default maximum characters per post.
pub const DEFAULT_MAX_CHARACTERS: usize = 500;

/// Default name of the placeholder eligible for truncation.
pub const DEFAULT_TRUNCATABLE: &str = "description";

/// An immutable message skeleton with a character budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTemplate {
    skeleton: String,
    segments: Vec<Segment>,
    link_placeholders: Vec<String>,
    max_characters: usize,
    truncatable: String,
}

impl PostTemplate {
    /// Build a template from a skeleton and its link placeholder names.
    ///
    /// Fails when the skeleton does not parse, when a placeholder appears
    /// twice, or when a link placeholder is not referenced by the skeleton.
    pub fn new<I, S>(
        skeleton: impl Into<String>,
        link_placeholders: I,
    ) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let skeleton = skeleton.into();
        let segments = skeleton::parse(&skeleton)?;

        let mut seen = BTreeSet::new();
        for name in segments.iter().filter_map(Segment::placeholder_name) {
            if !seen.insert(name) {
                return Err(TemplateError::DuplicatePlaceholder {
                    name: name.to_string(),
                });
            }
        }

        let link_placeholders: Vec<String> =
            link_placeholders.into_iter().map(Into::into).collect();
        if let Some(missing) = link_placeholders
            .iter()
            .find(|link| !seen.contains(link.as_str()))
        {
            return Err(TemplateError::UnknownLinkPlaceholder {
                name: missing.clone(),
            });
        }

        Ok(Self {
            skeleton,
            segments,
            link_placeholders,
            max_characters: DEFAULT_MAX_CHARACTERS,
            truncatable: DEFAULT_TRUNCATABLE.to_string(),
        })
    }

    /// Set the character budget.
    pub fn with_max_characters(mut self, max_characters: usize) -> Self {
        self.max_characters = max_characters;
        self
    }

    /// Set which placeholder may be truncated.
    pub fn with_truncatable(mut self, name: impl Into<String>) -> Self {
        self.truncatable = name.into();
        self
    }

    pub fn skeleton(&self) -> &str {
        &self.skeleton
    }

    pub fn link_placeholders(&self) -> &[String] {
        &self.link_placeholders
    }

    pub fn max_characters(&self) -> usize {
        self.max_characters
    }

    pub fn truncatable(&self) -> &str {
        &self.truncatable
    }

    /// Placeholder names in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::placeholder_name)
    }

    /// Length of the skeleton with every placeholder replaced by nothing.
    pub fn fixed_characters(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.chars().count(),
                Segment::Placeholder { .. } => 0,
            })
            .sum()
    }

    /// Characters the template consumes before real values are substituted,
    /// with links counted at their fixed cost.
    pub fn effective_length(&self) -> usize {
        LINK_CHARACTER_COST * self.link_placeholders.len() + self.fixed_characters()
    }

    /// Characters left for the truncatable field.
    ///
    /// Every value in `values` counts against the budget except links
    /// (already charged in [`Self::effective_length`]) and the truncatable
    /// field itself. Negative when the other fields alone overflow.
    pub fn available_space(&self, values: &FormatValues) -> i64 {
        let placeholder_characters: usize = values
            .iter()
            .filter(|(name, _)| !self.is_excluded(name))
            .map(|(_, value)| value.chars().count())
            .sum();

        self.max_characters as i64
            - self.effective_length() as i64
            - placeholder_characters as i64
    }

    /// Fill the template, truncating the truncatable field to fit the budget.
    ///
    /// Fails with [`TemplateError::MissingField`] when a placeholder of the
    /// skeleton has no value.
    pub fn format(&self, values: &FormatValues) -> Result<String, TemplateError> {
        let replacement = values.get(&self.truncatable).and_then(|value| {
            let available = self.available_space(values);
            (value.chars().count() as i64 > available)
                .then(|| truncate(value, available, ELLIPSIS))
        });

        let mut values = Cow::Borrowed(values);
        if let Some(shortened) = replacement {
            values
                .to_mut()
                .insert(self.truncatable.clone(), shortened);
        }

        skeleton::render_segments(&self.segments, &values)
    }

    fn is_excluded(&self, name: &str) -> bool {
        name == self.truncatable || self.link_placeholders.iter().any(|link| link == name)
    }
}
