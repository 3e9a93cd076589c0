//! Form elements.
//!
//! An [`Element`] is the atomic unit of a form: an id, a value, display
//! text, ordered filters and rules, the error messages collected while
//! processing, and the markup template it renders through.

use tracing::{debug, trace};

use crate::attributes::Attributes;
use crate::config::FormConfig;
use crate::filters::Filter;
use crate::placeholder::{html_escape, Placeholders};
use crate::rules::Rule;
use crate::value::Value;

const LABEL_TEMPLATE: &str = r#"<label for=":id">:label</label>"#;
const DESCRIPTION_TEMPLATE: &str = "<p>:description</p>";
const ERROR_CONTAINER_CLASS: &str = "rule-error-messages text-danger list-unstyled";

/// The kind of an element, carrying the fields only that kind uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// A single-line `<input>` of the given type (`text`, `email`, ...).
    Input {
        /// The HTML input type.
        input_type: String,
    },
    /// A multi-line `<textarea>`.
    Textarea {
        /// Number of visible rows.
        rows: usize,
    },
    /// A `<select>` dropdown.
    Select {
        /// Available choices (value, label).
        options: Vec<(String, String)>,
        /// Whether several choices may be selected.
        multiple: bool,
        /// Label of the leading empty option, if any.
        blank_label: Option<String>,
    },
    /// A single checkbox.
    Checkbox {
        /// The value submitted when checked.
        checked_value: String,
    },
    /// A hidden input.
    Hidden,
    /// A submit button. The element label is the button text.
    Submit,
}

impl ElementKind {
    /// Returns the markup template used when none is set explicitly.
    pub fn default_template(&self) -> String {
        match self {
            Self::Input { input_type } => format!(
                r#"<input type="{}" class=":class" id=":id" name=":id" value=":value":attrs>"#,
                html_escape(input_type)
            ),
            Self::Textarea { rows } => format!(
                r#"<textarea class=":class" id=":id" name=":id" rows="{rows}":attrs>:value</textarea>"#
            ),
            Self::Select { multiple: false, .. } => {
                r#"<select class=":class" id=":id" name=":id":attrs>:options</select>"#.to_string()
            }
            Self::Select { multiple: true, .. } => {
                r#"<select class=":class" id=":id" name=":id[]" multiple:attrs>:options</select>"#
                    .to_string()
            }
            Self::Checkbox { checked_value } => format!(
                r#"<input type="checkbox" class=":class" id=":id" name=":id" value="{}":checked:attrs>"#,
                html_escape(checked_value)
            ),
            Self::Hidden => {
                r#"<input type="hidden" id=":id" name=":id" value=":value":attrs>"#.to_string()
            }
            Self::Submit => {
                r#"<button type="submit" class=":class" id=":id":attrs>:label</button>"#.to_string()
            }
        }
    }

    /// Returns whether the element takes part in value binding.
    pub const fn accepts_input(&self) -> bool {
        !matches!(self, Self::Submit)
    }

    /// Returns the value a submission carries when the browser leaves the
    /// key out: unchecked checkboxes and multi-selects with nothing chosen.
    pub fn omitted_value(&self) -> Option<Value> {
        match self {
            Self::Checkbox { .. } => Some(Value::scalar("")),
            Self::Select { multiple: true, .. } => Some(Value::Sequence(Vec::new())),
            _ => None,
        }
    }

    /// Returns whether the label is rendered as a separate fragment.
    const fn has_label_fragment(&self) -> bool {
        !matches!(self, Self::Hidden | Self::Submit)
    }
}

/// Outcome of running an element's rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The element has no rules; nothing was evaluated.
    NoRules,
    /// Every rule ran; `failed` of them reported an error.
    Evaluated {
        /// Number of failing rules.
        failed: usize,
    },
}

impl RuleOutcome {
    /// Returns whether rules ran and all of them passed.
    pub const fn passed(self) -> bool {
        matches!(self, Self::Evaluated { failed: 0 })
    }
}

/// The three independent markup fragments of a rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedElement {
    /// The `<label>` fragment, absent when the element has no label.
    pub label: Option<String>,
    /// The description fragment, absent when the description is empty.
    pub description: Option<String>,
    /// The element markup itself.
    pub element: String,
}

/// A form element.
pub struct Element {
    id: String,
    kind: ElementKind,
    template: String,
    label: Option<String>,
    description: Option<String>,
    raw_value: Option<Value>,
    posted_value: Option<Value>,
    classes: Vec<String>,
    attrs: Attributes,
    filters: Vec<Box<dyn Filter>>,
    rules: Vec<Box<dyn Rule>>,
    rule_errors: Vec<String>,
    errors: Vec<String>,
    error_container_tag: String,
    error_item_tag: String,
    asset_base_path: String,
    asset_files: Vec<String>,
    asset_inlines: Vec<String>,
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("raw_value", &self.raw_value)
            .field("posted_value", &self.posted_value)
            .field("filters", &self.filters.len())
            .field("rules", &self.rules.len())
            .field("rule_errors", &self.rule_errors)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl Element {
    /// Creates an element of the given kind with its default template.
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        let defaults = FormConfig::default();
        Self {
            id: id.into(),
            template: kind.default_template(),
            kind,
            label: None,
            description: None,
            raw_value: None,
            posted_value: None,
            classes: Vec::new(),
            attrs: Attributes::new(),
            filters: Vec::new(),
            rules: Vec::new(),
            rule_errors: Vec::new(),
            errors: Vec::new(),
            error_container_tag: defaults.error_container_tag,
            error_item_tag: defaults.error_item_tag,
            asset_base_path: defaults.asset_base_path,
            asset_files: Vec::new(),
            asset_inlines: Vec::new(),
        }
    }

    /// Creates a text input.
    pub fn text(id: impl Into<String>) -> Self {
        Self::input(id, "text")
    }

    /// Creates an email input.
    pub fn email(id: impl Into<String>) -> Self {
        Self::input(id, "email")
    }

    /// Creates a password input.
    pub fn password(id: impl Into<String>) -> Self {
        Self::input(id, "password")
    }

    /// Creates a number input.
    pub fn number(id: impl Into<String>) -> Self {
        Self::input(id, "number")
    }

    /// Creates an input of an arbitrary type.
    pub fn input(id: impl Into<String>, input_type: impl Into<String>) -> Self {
        Self::new(
            id,
            ElementKind::Input {
                input_type: input_type.into(),
            },
        )
    }

    /// Creates a textarea with the specified rows.
    pub fn textarea(id: impl Into<String>, rows: usize) -> Self {
        Self::new(id, ElementKind::Textarea { rows })
    }

    /// Creates a dropdown with a leading blank option.
    pub fn select<V, L>(id: impl Into<String>, options: Vec<(V, L)>) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        Self::new(
            id,
            ElementKind::Select {
                options: collect_options(options),
                multiple: false,
                blank_label: Some("---------".to_string()),
            },
        )
    }

    /// Creates a multi-select. Its value is posted as a sequence.
    pub fn multi_select<V, L>(id: impl Into<String>, options: Vec<(V, L)>) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        Self::new(
            id,
            ElementKind::Select {
                options: collect_options(options),
                multiple: true,
                blank_label: None,
            },
        )
    }

    /// Creates a checkbox submitting `1` when checked.
    pub fn checkbox(id: impl Into<String>) -> Self {
        Self::new(
            id,
            ElementKind::Checkbox {
                checked_value: "1".to_string(),
            },
        )
    }

    /// Creates a hidden input.
    pub fn hidden(id: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Hidden)
    }

    /// Creates a submit button.
    pub fn submit(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Submit).with_label(text)
    }

    /// Applies error markup and asset settings from `config`.
    ///
    /// Asset files added before this call keep their previous prefix.
    #[must_use]
    pub fn with_config(mut self, config: &FormConfig) -> Self {
        self.error_container_tag = config.error_container_tag.clone();
        self.error_item_tag = config.error_item_tag.clone();
        self.asset_base_path = config.asset_base().to_string();
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the raw (programmatic) value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.raw_value = Some(value.into());
        self
    }

    /// Replaces the markup template.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Adds a CSS class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an extra HTML attribute, rendered through `:attrs`.
    #[must_use]
    pub fn with_attr(
        mut self,
        name: impl Into<String>,
        value: impl Into<crate::attributes::AttrValue>,
    ) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Adds a filter.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.add_filter(filter);
        self
    }

    /// Adds a rule.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.add_rule(rule);
        self
    }

    /// Removes the leading blank option of a single select.
    #[must_use]
    pub fn no_blank(mut self) -> Self {
        if let ElementKind::Select { blank_label, .. } = &mut self.kind {
            *blank_label = None;
        }
        self
    }

    /// Sets the label of the leading blank option of a select.
    #[must_use]
    pub fn blank_label(mut self, label: impl Into<String>) -> Self {
        if let ElementKind::Select { blank_label, .. } = &mut self.kind {
            *blank_label = Some(label.into());
        }
        self
    }

    /// Adds an asset file.
    #[must_use]
    pub fn with_asset_file(mut self, file: &str) -> Self {
        self.add_asset_file(file);
        self
    }

    /// Adds an inline asset snippet.
    #[must_use]
    pub fn with_asset_inline(mut self, code: &str) -> Self {
        self.add_asset_inline(code);
        self
    }

    /// Returns the element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the element kind.
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Returns the label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the markup template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Replaces the markup template.
    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
    }

    /// Returns the effective value: the posted value when one was set,
    /// otherwise the raw value.
    pub fn value(&self) -> Option<&Value> {
        self.posted_value.as_ref().or(self.raw_value.as_ref())
    }

    /// Returns the raw (programmatic) value.
    pub fn raw_value(&self) -> Option<&Value> {
        self.raw_value.as_ref()
    }

    /// Sets the raw (programmatic) value.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.raw_value = Some(value.into());
    }

    /// Returns the posted value.
    pub fn posted_value(&self) -> Option<&Value> {
        self.posted_value.as_ref()
    }

    /// Returns whether a posted value was set. An empty string counts.
    pub fn has_posted_value(&self) -> bool {
        self.posted_value.is_some()
    }

    /// Sets the externally submitted value.
    pub fn set_posted_value(&mut self, value: impl Into<Value>) {
        self.posted_value = Some(value.into());
    }

    /// Forgets the submitted value.
    pub fn clear_posted_value(&mut self) {
        self.posted_value = None;
    }

    /// Adds a CSS class.
    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.push(class.into());
    }

    /// Returns the classes joined by spaces.
    pub fn class_string(&self) -> String {
        self.classes.join(" ")
    }

    /// Returns the extra HTML attributes.
    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    /// Adds a filter. Filters run in insertion order.
    pub fn add_filter(&mut self, filter: impl Filter + 'static) {
        self.filters.push(Box::new(filter));
    }

    /// Adds a rule. Rules run in insertion order.
    pub fn add_rule(&mut self, rule: impl Rule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Returns the number of configured rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the number of configured filters.
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Runs every filter over the effective value and stores the result
    /// back where the effective value came from.
    pub fn process_filters(&mut self) {
        let filters = &self.filters;
        let slot = if self.posted_value.is_some() {
            &mut self.posted_value
        } else {
            &mut self.raw_value
        };

        if let Some(value) = slot.take() {
            *slot = Some(filters.iter().fold(value, |value, filter| filter.apply(value)));
        }
    }

    /// Evaluates every rule, recording one error message per failure.
    ///
    /// All rules run even after a failure. The messages of a previous run
    /// are replaced; errors added with [`Element::add_error`] are kept.
    /// With no rules configured nothing is evaluated and
    /// [`RuleOutcome::NoRules`] is returned.
    pub fn process_rules(&mut self) -> RuleOutcome {
        if self.rules.is_empty() {
            return RuleOutcome::NoRules;
        }

        let this: &Self = self;
        let messages: Vec<String> = this
            .rules
            .iter()
            .filter(|rule| !rule.is_valid(this))
            .map(|rule| {
                let message = rule.render_error_message(this);
                trace!(element = %this.id, %message, "rule failed");
                this.wrap_error(&message)
            })
            .collect();

        let failed = messages.len();
        self.rule_errors = messages;

        RuleOutcome::Evaluated { failed }
    }

    /// Runs filters, then rules.
    pub fn process(&mut self) -> RuleOutcome {
        self.process_filters();
        let outcome = self.process_rules();
        debug!(element = %self.id, ?outcome, "processed element");
        outcome
    }

    /// Appends an error message, wrapped in the configured item tag.
    ///
    /// Added errors survive later processing until [`Element::clear_errors`].
    pub fn add_error(&mut self, message: impl AsRef<str>) {
        let error = self.wrap_error(message.as_ref());
        self.errors.push(error);
    }

    fn wrap_error(&self, message: &str) -> String {
        let tag = &self.error_item_tag;
        format!("<{tag}>{message}</{tag}>")
    }

    /// Removes all collected error messages.
    pub fn clear_errors(&mut self) {
        self.rule_errors.clear();
        self.errors.clear();
    }

    /// Returns the collected error messages: rule failures of the last run
    /// first, then added errors.
    pub fn error_messages(&self) -> Vec<String> {
        self.rule_errors.iter().chain(&self.errors).cloned().collect()
    }

    /// Returns whether no error has been collected.
    pub fn is_valid(&self) -> bool {
        self.rule_errors.is_empty() && self.errors.is_empty()
    }

    /// Returns whether at least one error has been collected.
    pub fn has_errors(&self) -> bool {
        !self.is_valid()
    }

    /// Renders the collected messages inside the error container. The
    /// container is rendered even when empty.
    pub fn render_error_messages(&self) -> String {
        let tag = &self.error_container_tag;
        format!(
            r#"<{tag} class="{ERROR_CONTAINER_CLASS}">{}{}</{tag}>"#,
            self.rule_errors.concat(),
            self.errors.concat()
        )
    }

    /// Returns the placeholders this element renders with.
    pub fn placeholders(&self) -> Placeholders {
        let value = self.value().map(ToString::to_string).unwrap_or_default();
        let attrs = self.attrs.to_html();

        let mut placeholders = Placeholders::new()
            .with("id", self.id.as_str())
            .with("label", self.label.as_deref().unwrap_or_default())
            .with("value", html_escape(&value))
            .with("class", self.class_string())
            .with("description", self.description.as_deref().unwrap_or_default())
            .with(
                "attrs",
                if attrs.is_empty() {
                    attrs
                } else {
                    format!(" {attrs}")
                },
            );

        match &self.kind {
            ElementKind::Select {
                options,
                blank_label,
                ..
            } => placeholders.set("options", self.render_options(options, blank_label.as_deref())),
            ElementKind::Checkbox { checked_value } => {
                let checked = self.value().is_some_and(|v| v.contains(checked_value));
                placeholders.set("checked", if checked { " checked" } else { "" });
            }
            _ => {}
        }

        placeholders
    }

    fn render_options(&self, options: &[(String, String)], blank_label: Option<&str>) -> String {
        let mut html = String::new();

        if let Some(blank) = blank_label {
            html.push_str(&format!(
                r#"<option value="">{}</option>"#,
                html_escape(blank)
            ));
        }

        for (opt_value, label) in options {
            let selected = self.value().is_some_and(|v| v.contains(opt_value));
            let selected_attr = if selected { " selected" } else { "" };
            html.push_str(&format!(
                r#"<option value="{}"{selected_attr}>{}</option>"#,
                html_escape(opt_value),
                html_escape(label)
            ));
        }

        html
    }

    /// Substitutes this element's placeholders into `template`.
    pub fn parse_placeholders(&self, template: &str) -> String {
        self.placeholders().substitute(template).into_owned()
    }

    /// Renders the label, description and element fragments.
    pub fn render(&self) -> RenderedElement {
        let placeholders = self.placeholders();

        let label = self
            .label
            .as_deref()
            .filter(|l| !l.is_empty() && self.kind.has_label_fragment())
            .map(|_| placeholders.substitute(LABEL_TEMPLATE).into_owned());

        let description = self
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|_| placeholders.substitute(DESCRIPTION_TEMPLATE).into_owned());

        RenderedElement {
            label,
            description,
            element: placeholders.substitute(&self.template).into_owned(),
        }
    }

    /// Adds an asset file, prefixed with the configured asset base path.
    pub fn add_asset_file(&mut self, file: &str) {
        self.asset_files
            .push(format!("{}/{}", self.asset_base_path, file));
    }

    /// Returns the asset files.
    pub fn asset_files(&self) -> &[String] {
        &self.asset_files
    }

    /// Adds an inline asset snippet.
    pub fn add_asset_inline(&mut self, code: &str) {
        self.asset_inlines.push(code.trim().to_string());
    }

    /// Returns the inline asset snippets.
    pub fn asset_inlines(&self) -> &[String] {
        &self.asset_inlines
    }
}

fn collect_options<V, L>(options: Vec<(V, L)>) -> Vec<(String, String)>
where
    V: Into<String>,
    L: Into<String>,
{
    options
        .into_iter()
        .map(|(v, l)| (v.into(), l.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{CaseLowerFilter, TrimFilter};
    use crate::rules::{EmailRule, MaxLengthRule, MinLengthRule, RequiredRule};

    #[test]
    fn test_effective_value() {
        let mut element = Element::text("name").with_value("A");
        assert_eq!(element.value(), Some(&Value::from("A")));

        element.set_posted_value("B");
        assert_eq!(element.value(), Some(&Value::from("B")));
        assert_eq!(element.raw_value(), Some(&Value::from("A")));
    }

    #[test]
    fn test_empty_posted_value_counts_as_present() {
        let mut element = Element::text("name").with_value("A");
        element.set_posted_value("");
        assert!(element.has_posted_value());
        assert_eq!(element.value(), Some(&Value::from("")));

        element.clear_posted_value();
        assert_eq!(element.value(), Some(&Value::from("A")));
    }

    #[test]
    fn test_all_rules_run() {
        let mut element = Element::email("email")
            .with_rule(MinLengthRule::new(10))
            .with_rule(EmailRule::new())
            .with_rule(MaxLengthRule::new(2));
        element.set_posted_value("abc");

        let outcome = element.process();
        assert_eq!(outcome, RuleOutcome::Evaluated { failed: 3 });
        assert!(!element.is_valid());
        assert_eq!(element.error_messages().len(), 3);
        assert_eq!(
            element.error_messages()[1],
            "<li>Enter a valid email address.</li>"
        );
    }

    #[test]
    fn test_reprocessing_replaces_rule_errors() {
        let mut element = Element::text("name")
            .with_rule(RequiredRule::new())
            .with_rule(MinLengthRule::new(3));
        element.set_posted_value("");

        element.process();
        element.process();
        assert_eq!(
            element.error_messages(),
            ["<li>This field is required.</li>".to_string()]
        );

        element.set_posted_value("ab");
        assert_eq!(element.process(), RuleOutcome::Evaluated { failed: 1 });
        assert_eq!(element.error_messages().len(), 1);

        element.set_posted_value("ada");
        element.process();
        assert!(element.is_valid());
    }

    #[test]
    fn test_added_errors_survive_processing() {
        let mut element = Element::text("username").with_rule(RequiredRule::new());
        element.set_posted_value("ada");
        element.add_error("This username is already taken.");

        element.process();
        element.process();
        assert_eq!(
            element.error_messages(),
            ["<li>This username is already taken.</li>".to_string()]
        );
        assert!(element.has_errors());

        element.clear_errors();
        assert!(element.is_valid());
    }

    #[test]
    fn test_no_rules_is_distinct_from_passed() {
        let mut element = Element::text("name");
        let outcome = element.process();
        assert_eq!(outcome, RuleOutcome::NoRules);
        assert!(!outcome.passed());
        assert!(element.is_valid());
        assert!(element.error_messages().is_empty());

        let mut element = Element::text("name").with_rule(RequiredRule::new());
        element.set_posted_value("ada");
        let outcome = element.process();
        assert!(outcome.passed());
    }

    #[test]
    fn test_filters_run_before_rules() {
        let mut element = Element::text("code")
            .with_filter(TrimFilter)
            .with_filter(CaseLowerFilter)
            .with_rule(MaxLengthRule::new(3));
        element.set_posted_value("  ABC  ");

        element.process();
        assert!(element.is_valid());
        assert_eq!(element.posted_value(), Some(&Value::from("abc")));
    }

    #[test]
    fn test_filters_write_back_to_raw_value() {
        let mut element = Element::text("code")
            .with_value("ABC")
            .with_filter(CaseLowerFilter);
        element.process_filters();
        assert_eq!(element.raw_value(), Some(&Value::from("abc")));
        assert!(!element.has_posted_value());
    }

    #[test]
    fn test_render_placeholders() {
        let element = Element::text("name")
            .with_template("<input id=:id value=:value>")
            .with_value("x");
        assert_eq!(element.render().element, "<input id=name value=x>");

        let element = Element::text("name").with_template("<i data-x=:unknown>:id</i>");
        assert_eq!(element.render().element, "<i data-x=:unknown>name</i>");
    }

    #[test]
    fn test_render_fragments() {
        let element = Element::text("name")
            .with_label("Name")
            .with_description("Your full name")
            .with_class("wide")
            .with_value("Ada");
        let rendered = element.render();

        assert_eq!(
            rendered.label.as_deref(),
            Some(r#"<label for="name">Name</label>"#)
        );
        assert_eq!(rendered.description.as_deref(), Some("<p>Your full name</p>"));
        assert_eq!(
            rendered.element,
            r#"<input type="text" class="wide" id="name" name="name" value="Ada">"#
        );
    }

    #[test]
    fn test_render_omits_missing_fragments() {
        let rendered = Element::text("name").with_description("").render();
        assert_eq!(rendered.label, None);
        assert_eq!(rendered.description, None);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut element = Element::text("name")
            .with_label("Name")
            .with_rule(RequiredRule::new());
        element.set_posted_value("<b>");
        element.process();

        assert_eq!(element.render(), element.render());
        assert_eq!(element.render_error_messages(), element.render_error_messages());
    }

    #[test]
    fn test_value_is_escaped() {
        let element = Element::text("q").with_value(r#""><script>"#);
        assert!(element
            .render()
            .element
            .contains(r#"value="&quot;&gt;&lt;script&gt;""#));
    }

    #[test]
    fn test_render_error_messages() {
        let mut element = Element::text("name").with_rule(RequiredRule::new());
        assert_eq!(
            element.render_error_messages(),
            r#"<ul class="rule-error-messages text-danger list-unstyled"></ul>"#
        );

        element.process();
        assert_eq!(
            element.render_error_messages(),
            r#"<ul class="rule-error-messages text-danger list-unstyled"><li>This field is required.</li></ul>"#
        );
    }

    #[test]
    fn test_configured_error_tags() {
        let config = FormConfig::new().error_tags("div", "span");
        let mut element = Element::text("name")
            .with_config(&config)
            .with_rule(RequiredRule::new());
        element.process();
        assert_eq!(
            element.render_error_messages(),
            r#"<div class="rule-error-messages text-danger list-unstyled"><span>This field is required.</span></div>"#
        );
    }

    #[test]
    fn test_select_marks_selected() {
        let mut element = Element::select("status", vec![("draft", "Draft"), ("live", "Live")]);
        element.set_posted_value("live");
        let html = element.render().element;
        assert!(html.starts_with(r#"<select class="" id="status" name="status">"#));
        assert!(html.contains(r#"<option value="">---------</option>"#));
        assert!(html.contains(r#"<option value="live" selected>Live</option>"#));
        assert!(html.contains(r#"<option value="draft">Draft</option>"#));
    }

    #[test]
    fn test_multi_select() {
        let mut element =
            Element::multi_select("tags", vec![("a", "A"), ("b", "B"), ("c", "C")]);
        element.set_posted_value(vec!["a", "c"]);
        let html = element.render().element;
        assert!(html.contains(r#"name="tags[]" multiple"#));
        assert!(!html.contains("---------"));
        assert!(html.contains(r#"<option value="a" selected>"#));
        assert!(html.contains(r#"<option value="b">"#));
        assert!(html.contains(r#"<option value="c" selected>"#));
    }

    #[test]
    fn test_checkbox() {
        let mut element = Element::checkbox("terms");
        assert!(!element.render().element.contains("checked"));
        element.set_posted_value("1");
        assert_eq!(
            element.render().element,
            r#"<input type="checkbox" class="" id="terms" name="terms" value="1" checked>"#
        );
    }

    #[test]
    fn test_extra_attrs() {
        let element = Element::text("name")
            .with_attr("placeholder", "Jane")
            .with_attr("required", true);
        assert_eq!(
            element.render().element,
            r#"<input type="text" class="" id="name" name="name" value="" placeholder="Jane" required="required">"#
        );
    }

    #[test]
    fn test_submit_has_no_label_fragment() {
        let rendered = Element::submit("save", "Save").with_class("ui button").render();
        assert_eq!(rendered.label, None);
        assert_eq!(
            rendered.element,
            r#"<button type="submit" class="ui button" id="save">Save</button>"#
        );
    }

    #[test]
    fn test_assets() {
        let config = FormConfig::new().asset_base_path("/assets/");
        let element = Element::text("date")
            .with_config(&config)
            .with_asset_file("js/datepicker.js")
            .with_asset_inline("  $('#date').datepicker();\n");
        assert_eq!(element.asset_files(), ["/assets/js/datepicker.js".to_string()]);
        assert_eq!(element.asset_inlines(), ["$('#date').datepicker();".to_string()]);
    }
}
