//! Value filters applied before validation.

use crate::value::Value;

/// A pure transform of an element's value.
///
/// Filters are total: one that cannot act on its input returns it unchanged.
/// Sequences are transformed item by item, keeping order and length.
pub trait Filter: Send + Sync {
    /// Transforms a value.
    fn apply(&self, value: Value) -> Value;
}

impl<F> Filter for F
where
    F: Fn(Value) -> Value + Send + Sync,
{
    fn apply(&self, value: Value) -> Value {
        self(value)
    }
}

/// Lower-cases values (Unicode-aware).
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseLowerFilter;

impl Filter for CaseLowerFilter {
    fn apply(&self, value: Value) -> Value {
        value.map(str::to_lowercase)
    }
}

/// Upper-cases values (Unicode-aware).
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseUpperFilter;

impl Filter for CaseUpperFilter {
    fn apply(&self, value: Value) -> Value {
        value.map(str::to_uppercase)
    }
}

/// Strips leading and trailing whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrimFilter;

impl Filter for TrimFilter {
    fn apply(&self, value: Value) -> Value {
        value.map(|s| s.trim().to_string())
    }
}
