//! Text metrics: word count and reading time

use crate::error::{Error, Result};

/// Reading speed used by [`describe_length`]
pub const DEFAULT_WORDS_PER_MINUTE: usize = 250;

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Minutes needed to read `text`, rounded up
///
/// Empty text takes 0 minutes; any non-empty text takes at least 1.
pub fn average_reading_time(text: &str, words_per_minute: usize) -> Result<usize> {
    if words_per_minute == 0 {
        return Err(Error::invalid("words_per_minute must be greater than zero"));
    }
    Ok(word_count(text).div_ceil(words_per_minute))
}

/// "1 minute", "2 minutes"
pub fn reading_time_label(minutes: usize) -> String {
    format!("{} {}", minutes, pluralize("minute", minutes, None))
}

/// "1 word", "500 words"
pub fn content_length(text: &str) -> String {
    let count = word_count(text);
    format!("{} {}", count, pluralize("word", count, None))
}

/// Length and reading time of `text`
///
/// # Examples
/// ```ignore
/// describe_length(&"lorem ".repeat(500)) // -> "500 words in about 2 minutes"
/// ```
pub fn describe_length(text: &str) -> String {
    describe_length_at(text, DEFAULT_WORDS_PER_MINUTE)
        .unwrap_or_else(|_| content_length(text))
}

/// [`describe_length`] with a custom reading speed
pub fn describe_length_at(text: &str, words_per_minute: usize) -> Result<String> {
    let minutes = average_reading_time(text, words_per_minute)?;
    Ok(format!(
        "{} in about {}",
        content_length(text),
        reading_time_label(minutes)
    ))
}

/// Pick the singular or plural form of a noun for `count`
pub fn pluralize(singular: &str, count: usize, plural: Option<&str>) -> String {
    if count == 1 {
        singular.to_string()
    } else if let Some(plural) = plural {
        plural.to_string()
    } else {
        format!("{}s", singular)
    }
}
