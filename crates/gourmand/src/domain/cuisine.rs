use super::ValidationError;
use std::fmt;

/// Cuisine name normalized to a leading capital followed by lowercase text.
///
/// Only the first character of the whole name is capitalized, so
/// `"asian fusion"` becomes `"Asian fusion"`. Equality and hashing use the
/// normalized name, which makes case variants of the same text equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cuisine {
    name: String,
}

impl Cuisine {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCuisine);
        }

        if !trimmed.chars().all(is_cuisine_char) {
            return Err(ValidationError::InvalidCuisine {
                value: raw.to_string(),
            });
        }

        Ok(Self {
            name: capitalize_first(trimmed),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn is_cuisine_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '-' || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
