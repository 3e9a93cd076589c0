//! CSRF integration.
//!
//! Issuing and checking tokens happens outside this crate. A form only asks
//! its collaborator for the markup to embed.

use crate::placeholder::html_escape;

/// A CSRF collaborator able to render its hidden form element.
pub trait Csrf {
    /// Renders the markup embedded in every form, usually a hidden input.
    fn render_element(&self) -> String;
}

/// An externally issued token rendered as a hidden input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
    name: String,
    token: String,
}

impl CsrfToken {
    /// Creates a token rendered under the default `csrf_token` input name.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_name("csrf_token", token)
    }

    /// Creates a token rendered under a custom input name.
    pub fn with_name(name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
        }
    }

    /// Returns the input name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Csrf for CsrfToken {
    fn render_element(&self) -> String {
        format!(
            r#"<input type="hidden" name="{}" value="{}">"#,
            html_escape(&self.name),
            html_escape(&self.token)
        )
    }
}
