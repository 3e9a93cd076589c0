//! Validation rules.
//!
//! A rule reads an element's value and reports whether it is acceptable.
//! Its message is a template rendered against the element's placeholders
//! (`:id`, `:label`, `:value`, ...) plus any rule-specific ones such as
//! `:min` and `:max`.
//!
//! Apart from [`RequiredRule`], rules accept a missing or empty value; pair
//! them with `RequiredRule` to demand one. A sequence value passes only if
//! every item passes.

use std::sync::LazyLock;

use regex::Regex;

use crate::element::Element;
use crate::error::Result;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Trait for element validation rules.
pub trait Rule: Send + Sync {
    /// Returns whether the element's current value satisfies this rule.
    fn is_valid(&self, element: &Element) -> bool;

    /// Renders the message reported when the rule fails.
    fn render_error_message(&self, element: &Element) -> String;
}

/// Returns the items to check, or `None` when there is nothing to validate.
fn present_items(element: &Element) -> Option<&[String]> {
    element
        .value()
        .filter(|value| !value.is_empty())
        .map(|value| value.items())
}

fn all_items(element: &Element, check: impl Fn(&str) -> bool) -> bool {
    present_items(element).map_or(true, |items| items.iter().all(|item| check(item)))
}

/// Rule that requires a non-blank value.
#[derive(Debug, Clone)]
pub struct RequiredRule {
    message: String,
}

impl RequiredRule {
    /// Creates a new RequiredRule with default message.
    pub fn new() -> Self {
        Self {
            message: "This field is required.".to_string(),
        }
    }

    /// Creates a new RequiredRule with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RequiredRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for RequiredRule {
    fn is_valid(&self, element: &Element) -> bool {
        element
            .value()
            .is_some_and(|value| value.items().iter().any(|item| !item.trim().is_empty()))
    }

    fn render_error_message(&self, element: &Element) -> String {
        element.placeholders().substitute(&self.message).into_owned()
    }
}

/// Rule that enforces a minimum length in characters.
#[derive(Debug, Clone)]
pub struct MinLengthRule {
    min_length: usize,
    message: String,
}

impl MinLengthRule {
    /// Creates a new MinLengthRule.
    pub fn new(min_length: usize) -> Self {
        Self::with_message(
            min_length,
            "Ensure this value has at least :min characters.",
        )
    }

    /// Creates a new MinLengthRule with custom message.
    pub fn with_message(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            message: message.into(),
        }
    }
}

impl Rule for MinLengthRule {
    fn is_valid(&self, element: &Element) -> bool {
        all_items(element, |item| item.chars().count() >= self.min_length)
    }

    fn render_error_message(&self, element: &Element) -> String {
        element
            .placeholders()
            .with("min", self.min_length.to_string())
            .substitute(&self.message)
            .into_owned()
    }
}

/// Rule that enforces a maximum length in characters.
#[derive(Debug, Clone)]
pub struct MaxLengthRule {
    max_length: usize,
    message: String,
}

impl MaxLengthRule {
    /// Creates a new MaxLengthRule.
    pub fn new(max_length: usize) -> Self {
        Self::with_message(max_length, "Ensure this value has at most :max characters.")
    }

    /// Creates a new MaxLengthRule with custom message.
    pub fn with_message(max_length: usize, message: impl Into<String>) -> Self {
        Self {
            max_length,
            message: message.into(),
        }
    }
}

impl Rule for MaxLengthRule {
    fn is_valid(&self, element: &Element) -> bool {
        all_items(element, |item| item.chars().count() <= self.max_length)
    }

    fn render_error_message(&self, element: &Element) -> String {
        element
            .placeholders()
            .with("max", self.max_length.to_string())
            .substitute(&self.message)
            .into_owned()
    }
}

/// Rule for email addresses.
#[derive(Debug, Clone)]
pub struct EmailRule {
    message: String,
}

impl EmailRule {
    /// Creates a new EmailRule with default message.
    pub fn new() -> Self {
        Self {
            message: "Enter a valid email address.".to_string(),
        }
    }

    /// Creates a new EmailRule with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for EmailRule {
    fn is_valid(&self, element: &Element) -> bool {
        all_items(element, |item| EMAIL.is_match(item))
    }

    fn render_error_message(&self, element: &Element) -> String {
        element.placeholders().substitute(&self.message).into_owned()
    }
}

/// Rule for URL values.
#[derive(Debug, Clone)]
pub struct UrlRule {
    message: String,
}

impl UrlRule {
    /// Creates a new UrlRule with default message.
    pub fn new() -> Self {
        Self {
            message: "Enter a valid URL.".to_string(),
        }
    }

    /// Creates a new UrlRule with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for UrlRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for UrlRule {
    fn is_valid(&self, element: &Element) -> bool {
        all_items(element, |item| {
            item.starts_with("http://") || item.starts_with("https://")
        })
    }

    fn render_error_message(&self, element: &Element) -> String {
        element.placeholders().substitute(&self.message).into_owned()
    }
}

/// Rule using a custom regex pattern.
#[derive(Debug, Clone)]
pub struct RegexRule {
    pattern: Regex,
    message: String,
}

impl RegexRule {
    /// Creates a new RegexRule.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Rule for RegexRule {
    fn is_valid(&self, element: &Element) -> bool {
        all_items(element, |item| self.pattern.is_match(item))
    }

    fn render_error_message(&self, element: &Element) -> String {
        element.placeholders().substitute(&self.message).into_owned()
    }
}

/// Rule for a numeric range.
#[derive(Debug, Clone)]
pub struct RangeRule {
    min: Option<f64>,
    max: Option<f64>,
    message: String,
    not_a_number: String,
}

impl RangeRule {
    /// Creates a new RangeRule with min and max bounds.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        let message = match (min, max) {
            (Some(_), Some(_)) => "Value must be between :min and :max.",
            (Some(_), None) => "Value must be at least :min.",
            (None, Some(_)) => "Value must be at most :max.",
            (None, None) => "Invalid value.",
        };
        Self::with_message(min, max, message)
    }

    /// Creates a new RangeRule with custom message.
    pub fn with_message(min: Option<f64>, max: Option<f64>, message: impl Into<String>) -> Self {
        Self {
            min,
            max,
            message: message.into(),
            not_a_number: "Enter a valid number.".to_string(),
        }
    }

    fn in_range(&self, num: f64) -> bool {
        self.min.map_or(true, |min| num >= min) && self.max.map_or(true, |max| num <= max)
    }
}

impl Rule for RangeRule {
    fn is_valid(&self, element: &Element) -> bool {
        all_items(element, |item| {
            item.trim()
                .parse::<f64>()
                .is_ok_and(|num| self.in_range(num))
        })
    }

    fn render_error_message(&self, element: &Element) -> String {
        let unparsable = present_items(element).is_some_and(|items| {
            items.iter().any(|item| item.trim().parse::<f64>().is_err())
        });
        let template = if unparsable {
            &self.not_a_number
        } else {
            &self.message
        };

        let mut placeholders = element.placeholders();
        if let Some(min) = self.min {
            placeholders.set("min", min.to_string());
        }
        if let Some(max) = self.max {
            placeholders.set("max", max.to_string());
        }
        placeholders.substitute(template).into_owned()
    }
}

/// Rule that restricts the value to a fixed set of choices.
#[derive(Debug, Clone)]
pub struct ChoiceRule {
    choices: Vec<String>,
    message: String,
}

impl ChoiceRule {
    /// Creates a new ChoiceRule.
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_message(
            choices,
            "Select a valid choice. :value is not one of the available choices.",
        )
    }

    /// Creates a new ChoiceRule with custom message.
    pub fn with_message<I, S>(choices: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }
}

impl Rule for ChoiceRule {
    fn is_valid(&self, element: &Element) -> bool {
        all_items(element, |item| self.choices.iter().any(|c| c == item))
    }

    fn render_error_message(&self, element: &Element) -> String {
        element.placeholders().substitute(&self.message).into_owned()
    }
}

/// Rule backed by a closure.
pub struct FnRule {
    predicate: Box<dyn Fn(&Element) -> bool + Send + Sync>,
    message: String,
}

impl std::fmt::Debug for FnRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnRule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl FnRule {
    /// Creates a rule from a predicate and its failure message.
    pub fn new(
        predicate: impl Fn(&Element) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }
}

impl Rule for FnRule {
    fn is_valid(&self, element: &Element) -> bool {
        (self.predicate)(element)
    }

    fn render_error_message(&self, element: &Element) -> String {
        element.placeholders().substitute(&self.message).into_owned()
    }
}
