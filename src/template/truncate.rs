//! Character-width truncation for the truncatable field.

/// Ellipsis appended in place of a removed tail.
pub const ELLIPSIS: &str = "…";

/// Shorten `value` to at most `width` characters.
///
/// Widths are counted in `char`s. When the value is too long, the kept
/// prefix plus `ellipsis` is exactly `width` characters. A width of zero or
/// less yields an empty string, since even the ellipsis would not fit.
pub fn truncate(value: &str, width: i64, ellipsis: &str) -> String {
    let Ok(width) = usize::try_from(width) else {
        return String::new();
    };
    if width == 0 {
        return String::new();
    }
    if value.chars().count() <= width {
        return value.to_string();
    }

    let ellipsis_len = ellipsis.chars().count();
    if width <= ellipsis_len {
        return ellipsis.chars().take(width).collect();
    }

    let mut result: String = value.chars().take(width - ellipsis_len).collect();
    result.push_str(ellipsis);
    result
}
