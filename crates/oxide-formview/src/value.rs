//! Element values and submitted data.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The value of an element: a single string or an ordered list of strings
/// for multi-valued fields such as checkbox groups and multi-selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A single value.
    Scalar(String),
    /// An ordered sequence of values.
    Sequence(Vec<String>),
}

impl Value {
    /// Creates a scalar value.
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    /// Creates a sequence value.
    pub fn sequence<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }

    /// Returns the scalar string, or `None` for a sequence.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the items of this value. A scalar is a one-item slice.
    pub fn items(&self) -> &[String] {
        match self {
            Self::Scalar(s) => std::slice::from_ref(s),
            Self::Sequence(items) => items,
        }
    }

    /// Applies `f` to the scalar, or to every item of a sequence, keeping
    /// order and length.
    #[must_use]
    pub fn map(self, f: impl Fn(&str) -> String) -> Self {
        match self {
            Self::Scalar(s) => Self::Scalar(f(&s)),
            Self::Sequence(items) => Self::Sequence(items.iter().map(|s| f(s)).collect()),
        }
    }

    /// Returns whether the value is the empty string or an empty sequence.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(s) => s.is_empty(),
            Self::Sequence(items) => items.is_empty(),
        }
    }

    /// Returns whether any item equals `candidate`.
    pub fn contains(&self, candidate: &str) -> bool {
        self.items().iter().any(|item| item == candidate)
    }

    fn push(&mut self, item: String) {
        match self {
            Self::Scalar(s) => {
                let first = std::mem::take(s);
                *self = Self::Sequence(vec![first, item]);
            }
            Self::Sequence(items) => items.push(item),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => f.write_str(s),
            Self::Sequence(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Self::Sequence(values)
    }
}

impl From<Vec<&str>> for Value {
    fn from(values: Vec<&str>) -> Self {
        Self::sequence(values)
    }
}

/// Values submitted with a request, keyed by element id.
///
/// Parsing the request body is left to the caller; this type only receives
/// the decoded key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostedData {
    values: HashMap<String, Value>,
}

impl PostedData {
    /// Creates an empty set of posted values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds posted data from decoded key/value pairs.
    ///
    /// Keys ending in `[]` and keys that repeat are collected into a
    /// [`Value::Sequence`] in submission order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut data = Self::new();
        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            match key.strip_suffix("[]") {
                Some(name) => match data.values.get_mut(name) {
                    Some(existing) => existing.push(value),
                    None => {
                        data.values
                            .insert(name.to_string(), Value::Sequence(vec![value]));
                    }
                },
                None => match data.values.get_mut(&key) {
                    Some(existing) => existing.push(value),
                    None => {
                        data.values.insert(key, Value::Scalar(value));
                    }
                },
            }
        }
        data
    }

    /// Parses posted data from a JSON object of strings and string arrays.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::FormError::Config(e.to_string()))
    }

    /// Sets the value for a key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns the value submitted for a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns whether a value was submitted for a key.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of submitted keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns whether the form with the given scope was submitted, judged by
    /// the hidden scope marker every rendered form carries.
    pub fn is_submitted(&self, scope: &str) -> bool {
        self.contains(&scope_marker(scope))
    }
}

/// Returns the input name of the hidden marker identifying a form's scope.
pub fn scope_marker(scope: &str) -> String {
    format!("form[{scope}]")
}
