use regex::Regex;

use super::Matcher;
use crate::errors::{Result, ScreenplayError};

/// Valores que los matchers de texto saben leer. `None` nunca encaja.
pub trait TextValue {
    fn text(&self) -> Option<&str>;
}

impl TextValue for str {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextValue for String {
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl TextValue for Option<String> {
    fn text(&self) -> Option<&str> {
        self.as_deref()
    }
}

fn text_mismatch<T: TextValue + ?Sized>(actual: &T) -> String {
    match actual.text() {
        Some(s) => format!("was {s:?}"),
        None => "was None".to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct MatchesPattern {
    regex: Regex,
}

/// Busca `pattern` en cualquier posición del texto (equivale a `/pattern/`).
pub fn matches_pattern(pattern: &str) -> Result<MatchesPattern> {
    let regex = Regex::new(pattern).map_err(|e| ScreenplayError::InvalidPattern(e.to_string()))?;
    Ok(MatchesPattern { regex })
}

impl<T: TextValue + ?Sized> Matcher<T> for MatchesPattern {
    fn matches(&self, actual: &T) -> bool {
        actual.text().is_some_and(|s| self.regex.is_match(s))
    }

    fn describe(&self) -> String {
        format!("a string matching /{}/", self.regex.as_str())
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        text_mismatch(actual)
    }
}

#[derive(Debug, Clone)]
pub struct ContainsString {
    needle: String,
}

pub fn contains_string(needle: impl Into<String>) -> ContainsString {
    ContainsString { needle: needle.into() }
}

impl<T: TextValue + ?Sized> Matcher<T> for ContainsString {
    fn matches(&self, actual: &T) -> bool {
        actual.text().is_some_and(|s| s.contains(&self.needle))
    }

    fn describe(&self) -> String {
        format!("a string containing {:?}", self.needle)
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        text_mismatch(actual)
    }
}
