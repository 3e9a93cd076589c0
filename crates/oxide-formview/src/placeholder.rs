//! Named placeholder substitution for markup templates.
//!
//! A template such as `<input id=":id" value=":value">` is rendered by
//! replacing each `:name` token whose name belongs to a closed
//! [`Placeholders`] set. Tokens are matched greedily (`:idx` is the token
//! `idx`, never `id` followed by `x`), unknown tokens are copied verbatim
//! and substituted text is never scanned again.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("placeholder token pattern is valid")
});

/// A closed set of placeholder names and their replacement text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    values: HashMap<String, String>,
}

impl Placeholders {
    /// Creates an empty placeholder set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement for `:name`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder method to set the replacement for `:name`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Returns the replacement for `:name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns whether `:name` is part of the set.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Renders `template` against this set.
    pub fn substitute<'t>(&self, template: &'t str) -> Cow<'t, str> {
        TOKEN.replace_all(template, |caps: &Captures<'_>| match self.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
    }
}

/// Renders `template` against `placeholders`.
pub fn substitute(template: &str, placeholders: &Placeholders) -> String {
    placeholders.substitute(template).into_owned()
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_known_names() {
        let placeholders = Placeholders::new().with("id", "name").with("value", "x");
        assert_eq!(
            substitute("<input id=:id value=:value>", &placeholders),
            "<input id=name value=x>"
        );
    }

    #[test]
    fn test_unknown_placeholder_is_verbatim() {
        let placeholders = Placeholders::new().with("id", "name");
        assert_eq!(
            substitute("<b data-x=:unknown>:id</b>", &placeholders),
            "<b data-x=:unknown>name</b>"
        );
    }

    #[test]
    fn test_tokens_are_matched_greedily() {
        let placeholders = Placeholders::new().with("id", "name");
        assert_eq!(substitute(":idx :id", &placeholders), ":idx name");
    }

    #[test]
    fn test_substituted_text_is_not_rescanned() {
        let placeholders = Placeholders::new().with("value", ":id").with("id", "name");
        assert_eq!(substitute(":value", &placeholders), ":id");
    }

    #[test]
    fn test_non_token_colons_survive() {
        let placeholders = Placeholders::new().with("id", "a");
        assert_eq!(
            substitute("style=\"color: red\" :id :: :1", &placeholders),
            "style=\"color: red\" a :: :1"
        );
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }
}
