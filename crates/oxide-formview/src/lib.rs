//! # oxide-formview
//!
//! Server-side form construction and validation with a block/row layout.
//!
//! This crate provides:
//! - Elements with ordered value filters and validation rules
//! - A filter-then-rule processing pipeline that collects every error
//! - Rows and named blocks composing elements into a form
//! - Form rendering with error summary, scope marker and CSRF element
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_formview::{
//!     Block, BlocksTemplate, Element, FieldSet, FormView, PostedData, Row,
//!     TemplateParams,
//! };
//! use oxide_formview::filters::CaseLowerFilter;
//! use oxide_formview::rules::{EmailRule, RequiredRule};
//!
//! // Define the elements
//! let mut fields = FieldSet::new()
//!     .field(
//!         Element::text("name")
//!             .with_label("Name")
//!             .with_rule(RequiredRule::new()),
//!     )?
//!     .field(
//!         Element::email("email")
//!             .with_label("Email")
//!             .with_filter(CaseLowerFilter)
//!             .with_rule(RequiredRule::new())
//!             .with_rule(EmailRule::new()),
//!     )?;
//! let submit = Element::submit("save", "Sign up");
//!
//! // Bind what the request carried, then filter and validate
//! let posted = PostedData::from_pairs([("name", ""), ("email", "ADA@Example.com")]);
//! fields.bind(&posted);
//! let valid = fields.process();
//! assert!(!valid);
//!
//! // Lay the elements out and render
//! let form = FormView::new("signup")
//!     .with_url("/signup")
//!     .with_submit(&submit)
//!     .with_block(
//!         Block::new("account").row(
//!             Row::new()
//!                 .element_with_width(fields.get("name")?, 8)
//!                 .element_with_width(fields.get("email")?, 8),
//!         ),
//!     )?;
//!
//! assert!(form.has_errors());
//! let html = form.render(&BlocksTemplate, "signup.html", TemplateParams::new())?;
//! assert!(html.contains("This field is required."));
//! assert!(html.contains("ada@example.com"));
//! # Ok::<(), oxide_formview::FormError>(())
//! ```
//!
//! ## Rules
//!
//! Every rule of an element runs, so a user sees all violations at once:
//!
//! ```rust
//! use oxide_formview::{Element, RuleOutcome};
//! use oxide_formview::rules::{MaxLengthRule, MinLengthRule, RequiredRule};
//!
//! let mut element = Element::text("code")
//!     .with_rule(MinLengthRule::new(4))
//!     .with_rule(MaxLengthRule::new(2));
//! element.set_posted_value("abc");
//!
//! assert_eq!(element.process(), RuleOutcome::Evaluated { failed: 2 });
//! assert_eq!(element.error_messages().len(), 2);
//!
//! // An element without rules reports that nothing was evaluated
//! let mut free = Element::text("comment");
//! assert_eq!(free.process(), RuleOutcome::NoRules);
//! assert!(free.is_valid());
//! ```
//!
//! ## Templates
//!
//! Element markup is a template with `:name` placeholders. Unknown
//! placeholders are kept as they are:
//!
//! ```rust
//! use oxide_formview::Element;
//!
//! let element = Element::text("name")
//!     .with_template("<input id=:id value=:value data-x=:unknown>")
//!     .with_value("x");
//! assert_eq!(element.render().element, "<input id=name value=x data-x=:unknown>");
//! ```

mod attributes;
mod block;
mod config;
pub mod csrf;
mod element;
mod error;
mod fields;
pub mod filters;
mod form;
pub mod placeholder;
mod row;
pub mod rules;
mod template;
mod value;

pub use attributes::{render_attributes, AttrValue, Attributes};
pub use block::Block;
pub use config::FormConfig;
pub use csrf::{Csrf, CsrfToken};
pub use element::{Element, ElementKind, RenderedElement, RuleOutcome};
pub use error::{FormError, Result};
pub use fields::FieldSet;
pub use filters::Filter;
pub use form::FormView;
pub use row::{width_class, Row, RowElement};
pub use rules::Rule;
pub use template::{
    BlocksTemplate, InlineTemplate, TemplateContext, TemplateParams, TemplateRenderer,
};
pub use value::{scope_marker, PostedData, Value};
