//! Skeleton parsing and `{name}` substitution.
//!
//! A skeleton is parsed once into literal and placeholder segments. The
//! segments drive both substitution and the measurement of how many
//! characters the skeleton itself contributes to a post.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of placeholder `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! A placeholder without a value is an error, never an empty substitution.

use super::error::TemplateError;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Placeholder values supplied to a single format call.
pub type FormatValues = BTreeMap<String, String>;

/// One parsed piece of a skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Text emitted verbatim (escapes already resolved).
    Literal(String),
    /// A named slot, with the byte offset of its opening brace.
    Placeholder { name: String, position: usize },
}

impl Segment {
    pub(crate) fn placeholder_name(&self) -> Option<&str> {
        match self {
            Segment::Placeholder { name, .. } => Some(name),
            Segment::Literal(_) => None,
        }
    }
}

/// Parse a skeleton into segments.
pub(crate) fn parse(template: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    literal.push('{');
                    continue;
                }

                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                }

                // Whitespace around the name is tolerated: `{ docket }`
                let name = name.trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyPlaceholder { position: pos });
                }

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder {
                    name: name.to_string(),
                    position: pos,
                });
            }
            '}' => {
                // `}}` and a lone `}` both render as one `}`
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                literal.push('}');
            }
            _ => literal.push(ch),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(segments)
}

/// Fill parsed segments with values.
pub(crate) fn render_segments(
    segments: &[Segment],
    values: &FormatValues,
) -> Result<String, TemplateError> {
    let mut result = String::new();

    for segment in segments {
        match segment {
            Segment::Literal(text) => result.push_str(text),
            Segment::Placeholder { name, position } => match values.get(name) {
                Some(value) => result.push_str(value),
                None => {
                    return Err(TemplateError::MissingField {
                        name: name.clone(),
                        position: *position,
                    });
                }
            },
        }
    }

    Ok(result)
}

/// Render a skeleton string by substituting placeholders.
///
/// # Examples
///
/// ```
/// use docketpost::template::{render_template, values};
///
/// let vals = values([("docket", "Doe v. Roe"), ("doc_num", "12")]);
/// let out = render_template("Doc #{doc_num} in {docket}", &vals).unwrap();
/// assert_eq!(out, "Doc #12 in Doe v. Roe");
/// ```
pub fn render_template(template: &str, values: &FormatValues) -> Result<String, TemplateError> {
    let segments = parse(template)?;
    render_segments(&segments, values)
}

/// List the placeholder names of a skeleton in order of appearance.
pub fn placeholders(template: &str) -> Result<Vec<String>, TemplateError> {
    Ok(parse(template)?
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder { name, .. } => Some(name),
            Segment::Literal(_) => None,
        })
        .collect())
}

/// Build a format request from name/value pairs.
///
/// Values only need to implement `Display`, so numbers can be passed as-is.
pub fn values<I, K, V>(pairs: I) -> FormatValues
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Display,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.to_string()))
        .collect()
}
