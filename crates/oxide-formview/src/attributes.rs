//! HTML attribute rendering.

use crate::placeholder::html_escape;

/// The value of an HTML attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// A plain text value.
    Text(String),
    /// A space-separated list, such as `class`.
    List(Vec<String>),
    /// A boolean attribute. `true` renders as `name="name"`.
    Flag(bool),
}

impl AttrValue {
    /// Returns the rendered value, or `None` when the attribute is omitted.
    fn rendered(&self, name: &str) -> Option<String> {
        match self {
            Self::Text(text) if text.is_empty() => None,
            Self::Text(text) => Some(text.clone()),
            Self::List(items) => {
                let joined = items
                    .iter()
                    .filter(|item| !item.is_empty())
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(" ");
                (!joined.is_empty()).then_some(joined)
            }
            Self::Flag(true) => Some(name.to_string()),
            Self::Flag(false) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<usize> for AttrValue {
    fn from(value: usize) -> Self {
        Self::Text(value.to_string())
    }
}

/// An insertion-ordered set of HTML attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute. Setting an existing name replaces its value in
    /// place, keeping its position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Sets an attribute when `value` is present, removes it otherwise.
    pub fn set_opt<V: Into<AttrValue>>(&mut self, name: impl Into<String>, value: Option<V>) {
        let name = name.into();
        match value {
            Some(value) => self.set(name, value),
            None => self.remove(&name),
        }
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Removes an attribute.
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|(n, _)| n != name);
    }

    /// Returns an attribute value.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Returns whether no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the set as an HTML attribute string.
    pub fn to_html(&self) -> String {
        render_attributes(self)
    }
}

/// Renders attributes as `name="value"` pairs joined by single spaces.
///
/// List values are joined by spaces. Empty text, empty lists and `false`
/// flags are omitted entirely. Values are HTML-escaped.
pub fn render_attributes(attrs: &Attributes) -> String {
    attrs
        .entries
        .iter()
        .filter_map(|(name, value)| {
            value
                .rendered(name)
                .map(|v| format!(r#"{name}="{}""#, html_escape(&v)))
        })
        .collect::<Vec<_>>()
        .join(" ")
}
