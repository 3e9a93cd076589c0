//! Rendering the interior of a form.
//!
//! [`FormView::render`](crate::FormView::render) hands the body of the form
//! to a [`TemplateRenderer`]. Real applications plug in their template
//! engine; [`BlocksTemplate`] and [`InlineTemplate`] cover the cases where
//! none is wired.

use serde_json::Value as JsonValue;

use crate::error::Result;
use crate::form::FormView;
use crate::placeholder::{html_escape, Placeholders};

/// Caller-supplied template parameters.
pub type TemplateParams = serde_json::Map<String, JsonValue>;

/// Everything a template sees: the caller's parameters and the form.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    /// Caller-supplied parameters.
    pub params: &'a TemplateParams,
    /// The form being rendered.
    pub form: &'a FormView<'a>,
}

impl<'a> TemplateContext<'a> {
    /// Returns a caller parameter.
    pub fn param(&self, name: &str) -> Option<&'a JsonValue> {
        self.params.get(name)
    }
}

/// A template collaborator producing the body of a form.
pub trait TemplateRenderer {
    /// Renders `template` with the given context.
    fn render(&self, template: &str, context: &TemplateContext<'_>) -> Result<String>;
}

impl<F> TemplateRenderer for F
where
    F: Fn(&str, &TemplateContext<'_>) -> Result<String>,
{
    fn render(&self, template: &str, context: &TemplateContext<'_>) -> Result<String> {
        self(template, context)
    }
}

/// Renders every block in order followed by the submit element. The
/// template identifier is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlocksTemplate;

impl TemplateRenderer for BlocksTemplate {
    fn render(&self, _template: &str, context: &TemplateContext<'_>) -> Result<String> {
        let mut html: String = context.form.blocks().iter().map(|b| b.render()).collect();
        if let Some(submit) = context.form.render_submit_element() {
            html.push_str(&submit);
        }
        Ok(html)
    }
}

/// Treats the template identifier as the markup itself.
///
/// Recognized placeholders are each block id (`:contact` renders the
/// block `contact`), `:submit`, and every string, number or boolean
/// parameter, HTML-escaped. Block ids and parameter names must be plain
/// identifiers to be addressable.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineTemplate;

impl TemplateRenderer for InlineTemplate {
    fn render(&self, template: &str, context: &TemplateContext<'_>) -> Result<String> {
        let mut placeholders = Placeholders::new();

        for (name, value) in context.params {
            let text = match value {
                JsonValue::String(s) => s.clone(),
                JsonValue::Number(n) => n.to_string(),
                JsonValue::Bool(b) => b.to_string(),
                _ => continue,
            };
            placeholders.set(name.as_str(), html_escape(&text));
        }

        for block in context.form.blocks() {
            placeholders.set(block.id(), block.render());
        }

        placeholders.set(
            "submit",
            context.form.render_submit_element().unwrap_or_default(),
        );

        Ok(placeholders.substitute(template).into_owned())
    }
}
