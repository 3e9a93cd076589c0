//! Error types for form construction and rendering.
//!
//! Validation failures are not errors: they are collected on each
//! [`Element`](crate::Element) and queried. The variants below are wiring
//! mistakes or collaborator failures and abort the current request.

use thiserror::Error;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// No block with this id has been added to the form.
    #[error("requested form block \"{0}\" does not exist")]
    BlockNotFound(String),

    /// A block with this id has already been added to the form.
    #[error("form block \"{0}\" has already been set")]
    DuplicateBlock(String),

    /// No element with this id is registered.
    #[error("requested element \"{0}\" does not exist")]
    ElementNotFound(String),

    /// An element with this id is already registered.
    #[error("element \"{0}\" has already been added")]
    DuplicateElement(String),

    /// The template collaborator failed to render the form body.
    #[error("failed to render template: {0}")]
    Template(String),

    /// Configuration could not be parsed.
    #[error("invalid form configuration: {0}")]
    Config(String),

    /// A rule was built from an invalid regular expression.
    #[error("invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl FormError {
    /// Returns whether this error reports a missing block or element.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::BlockNotFound(_) | Self::ElementNotFound(_))
    }

    /// Returns whether this error reports an id registered twice.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateBlock(_) | Self::DuplicateElement(_))
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_identifier() {
        let err = FormError::BlockNotFound("billing".to_string());
        assert_eq!(
            err.to_string(),
            "requested form block \"billing\" does not exist"
        );

        let err = FormError::DuplicateBlock("billing".to_string());
        assert!(err.to_string().contains("billing"));
    }

    #[test]
    fn test_classification() {
        assert!(FormError::BlockNotFound("a".into()).is_not_found());
        assert!(FormError::ElementNotFound("a".into()).is_not_found());
        assert!(FormError::DuplicateBlock("a".into()).is_conflict());
        assert!(FormError::DuplicateElement("a".into()).is_conflict());
        assert!(!FormError::Template("x".into()).is_conflict());
    }
}
