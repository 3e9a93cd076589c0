//! Form configuration.
//!
//! Configuration is built once and handed to elements and forms explicitly.
//! Nothing in this crate keeps process-wide mutable defaults.

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// Settings shared by the elements and forms of an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Base path prepended to element asset files.
    pub asset_base_path: String,
    /// Tag wrapping the list of an element's error messages.
    pub error_container_tag: String,
    /// Tag wrapping each individual error message.
    pub error_item_tag: String,
    /// Title of the form-level error summary.
    pub error_title: String,
    /// Body of the form-level error summary.
    pub error_message: String,
    /// Classes of the outer `<form>` tag.
    pub form_classes: Vec<String>,
    /// Default submission method.
    pub method: String,
    /// Default `accept-charset`.
    pub accept_charset: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            asset_base_path: String::new(),
            error_container_tag: "ul".to_string(),
            error_item_tag: "li".to_string(),
            error_title: "Looks like we are missing some information.".to_string(),
            error_message: "Please have a look at the error messages below.".to_string(),
            form_classes: vec!["ui".to_string(), "form".to_string(), "large".to_string()],
            method: "POST".to_string(),
            accept_charset: "utf-8".to_string(),
        }
    }
}

impl FormConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FormError::Config(e.to_string()))
    }

    /// Sets the asset base path.
    #[must_use]
    pub fn asset_base_path(mut self, path: impl Into<String>) -> Self {
        self.asset_base_path = path.into();
        self
    }

    /// Sets the error container and item tags.
    #[must_use]
    pub fn error_tags(mut self, container: impl Into<String>, item: impl Into<String>) -> Self {
        self.error_container_tag = container.into();
        self.error_item_tag = item.into();
        self
    }

    /// Returns the asset base path without a trailing slash.
    pub fn asset_base(&self) -> &str {
        self.asset_base_path.trim_end_matches('/')
    }
}
