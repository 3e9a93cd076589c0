//! The top-level form view.

use ironhtml::html;
use ironhtml_elements::{Div, P};
use tracing::{debug, warn};

use crate::attributes::Attributes;
use crate::block::Block;
use crate::config::FormConfig;
use crate::csrf::Csrf;
use crate::element::Element;
use crate::error::{FormError, Result};
use crate::placeholder::html_escape;
use crate::template::{TemplateContext, TemplateParams, TemplateRenderer};
use crate::value::scope_marker;

/// A form: an ordered set of uniquely named blocks plus the submit button,
/// CSRF element and error summary wrapped around them.
///
/// Elements are borrowed, so they must be bound and processed before the
/// form is assembled. Validity is recomputed from the elements on every
/// query.
pub struct FormView<'a> {
    scope: String,
    url: Option<String>,
    method: String,
    accept_charset: String,
    classes: Vec<String>,
    blocks: Vec<Block<'a>>,
    submit: Option<&'a Element>,
    csrf: Option<&'a dyn Csrf>,
    render_error_message: bool,
    error_title: String,
    error_message: String,
}

impl std::fmt::Debug for FormView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormView")
            .field("scope", &self.scope)
            .field("url", &self.url)
            .field("method", &self.method)
            .field("blocks", &self.blocks)
            .field("submit", &self.submit.map(Element::id))
            .field("csrf", &self.csrf.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a> FormView<'a> {
    /// Creates a form with the default configuration.
    pub fn new(scope: impl Into<String>) -> Self {
        Self::with_config(scope, &FormConfig::default())
    }

    /// Creates a form using the method, charset, classes and error summary
    /// texts from `config`.
    pub fn with_config(scope: impl Into<String>, config: &FormConfig) -> Self {
        Self {
            scope: scope.into(),
            url: None,
            method: config.method.clone(),
            accept_charset: config.accept_charset.clone(),
            classes: config.form_classes.clone(),
            blocks: Vec::new(),
            submit: None,
            csrf: None,
            render_error_message: true,
            error_title: config.error_title.clone(),
            error_message: config.error_message.clone(),
        }
    }

    /// Sets the action URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the submission method.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets the submit element.
    #[must_use]
    pub fn with_submit(mut self, element: &'a Element) -> Self {
        self.submit = Some(element);
        self
    }

    /// Sets the CSRF collaborator.
    #[must_use]
    pub fn with_csrf(mut self, csrf: &'a dyn Csrf) -> Self {
        self.csrf = Some(csrf);
        self
    }

    /// Enables or disables the error summary.
    #[must_use]
    pub fn with_error_summary(mut self, enabled: bool) -> Self {
        self.render_error_message = enabled;
        self
    }

    /// Sets the error summary title. An empty title is not rendered.
    #[must_use]
    pub fn with_error_title(mut self, title: impl Into<String>) -> Self {
        self.error_title = title.into();
        self
    }

    /// Sets the error summary message. An empty message is not rendered.
    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Adds a block, failing if its id is taken.
    pub fn with_block(mut self, block: Block<'a>) -> Result<Self> {
        self.add_block(block)?;
        Ok(self)
    }

    /// Returns the scope.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Returns the action URL.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Returns the submission method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the `accept-charset`.
    pub fn accept_charset(&self) -> &str {
        &self.accept_charset
    }

    /// Returns the submit element.
    pub fn submit_element(&self) -> Option<&'a Element> {
        self.submit
    }

    /// Returns whether the error summary is rendered when there are errors.
    pub fn should_render_error_message(&self) -> bool {
        self.render_error_message
    }

    /// Returns the error summary title.
    pub fn error_title(&self) -> &str {
        &self.error_title
    }

    /// Returns the error summary message.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Returns the block with this id.
    pub fn get_block(&self, id: &str) -> Result<&Block<'a>> {
        self.blocks.iter().find(|b| b.id() == id).ok_or_else(|| {
            warn!(scope = %self.scope, block = id, "form block not found");
            FormError::BlockNotFound(id.to_string())
        })
    }

    /// Returns the block with this id for modification.
    pub fn get_block_mut(&mut self, id: &str) -> Result<&mut Block<'a>> {
        let scope = &self.scope;
        self.blocks.iter_mut().find(|b| b.id() == id).ok_or_else(|| {
            warn!(scope = %scope, block = id, "form block not found");
            FormError::BlockNotFound(id.to_string())
        })
    }

    /// Adds a block. Block ids are write-once: a second block with the same
    /// id is rejected and the first one is kept.
    pub fn add_block(&mut self, block: Block<'a>) -> Result<()> {
        if self.blocks.iter().any(|b| b.id() == block.id()) {
            warn!(scope = %self.scope, block = block.id(), "form block already set");
            return Err(FormError::DuplicateBlock(block.id().to_string()));
        }
        self.blocks.push(block);
        Ok(())
    }

    /// Adds blocks in order, stopping at the first conflict.
    pub fn set_blocks<I>(&mut self, blocks: I) -> Result<()>
    where
        I: IntoIterator<Item = Block<'a>>,
    {
        blocks.into_iter().try_for_each(|block| self.add_block(block))
    }

    /// Returns the blocks in insertion order.
    pub fn blocks(&self) -> &[Block<'a>] {
        &self.blocks
    }

    /// Iterates over every element of every block.
    pub fn elements(&self) -> impl Iterator<Item = &'a Element> + '_ {
        self.blocks.iter().flat_map(Block::elements)
    }

    /// Returns whether any element across all blocks has errors, stopping
    /// at the first one found.
    pub fn has_errors(&self) -> bool {
        self.elements().any(Element::has_errors)
    }

    /// Renders the form.
    ///
    /// The body comes from `renderer`, which sees `params` and the form
    /// itself. It is wrapped in the `<form>` tag together with the error
    /// summary, the hidden scope marker and the CSRF element.
    pub fn render(
        &self,
        renderer: &dyn TemplateRenderer,
        template: &str,
        params: TemplateParams,
    ) -> Result<String> {
        let has_errors = self.has_errors();
        debug!(
            scope = %self.scope,
            template,
            blocks = self.blocks.len(),
            has_errors,
            "rendering form"
        );

        let context = TemplateContext {
            params: &params,
            form: self,
        };
        let body = renderer.render(template, &context)?;

        let mut class = self.classes.clone();
        if has_errors {
            class.push("warning".to_string());
        }

        let mut attrs = Attributes::new();
        attrs.set_opt("action", self.url.as_deref());
        attrs.set("method", self.method.as_str());
        attrs.set("accept-charset", self.accept_charset.as_str());
        attrs.set("class", class);

        let error = if self.render_error_message {
            self.render_error_message()
        } else {
            None
        };

        Ok(format!(
            "<form {}>{}{}{}{}</form>",
            attrs.to_html(),
            error.unwrap_or_default(),
            self.render_scope_element(),
            self.render_csrf_element().unwrap_or_default(),
            body
        ))
    }

    /// Renders the error summary, or `None` when the form has no errors.
    ///
    /// Title and message are markup and are inserted as they are.
    pub fn render_error_message(&self) -> Option<String> {
        if !self.has_errors() {
            return None;
        }

        let title = self.error_title.as_str();
        let message = self.error_message.as_str();

        Some(
            html! { div.class("ui warning message") }
                .when(!title.is_empty(), |d| {
                    d.child::<Div, _>(|h| h.class("header").raw(title))
                })
                .when(!message.is_empty(), |d| d.child::<P, _>(|p| p.raw(message)))
                .render(),
        )
    }

    /// Renders the hidden input marking which form was submitted.
    pub fn render_scope_element(&self) -> String {
        format!(
            r#"<input type="hidden" name="{}" value="1">"#,
            html_escape(&scope_marker(&self.scope))
        )
    }

    /// Renders the CSRF element, if a collaborator is set.
    pub fn render_csrf_element(&self) -> Option<String> {
        self.csrf.map(|csrf| csrf.render_element())
    }

    /// Renders the submit element, if one is set.
    pub fn render_submit_element(&self) -> Option<String> {
        self.submit.map(|element| element.render().element)
    }

    /// Returns the asset files of every element, without duplicates, in
    /// first-seen order.
    pub fn asset_files(&self) -> Vec<String> {
        self.collect_assets(Element::asset_files)
    }

    /// Returns the inline asset snippets of every element, without
    /// duplicates, in first-seen order.
    pub fn asset_inlines(&self) -> Vec<String> {
        self.collect_assets(Element::asset_inlines)
    }

    fn collect_assets(&self, assets: fn(&'a Element) -> &'a [String]) -> Vec<String> {
        let mut seen = Vec::new();
        for element in self.elements().chain(self.submit) {
            for asset in assets(element) {
                if !seen.contains(asset) {
                    seen.push(asset.clone());
                }
            }
        }
        seen
    }
}
