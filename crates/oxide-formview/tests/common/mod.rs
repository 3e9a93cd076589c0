#![allow(dead_code)]

use oxide_formview::filters::{CaseLowerFilter, TrimFilter};
use oxide_formview::rules::{EmailRule, MinLengthRule, RequiredRule};
use oxide_formview::{Element, FieldSet, PostedData};

/// Builds the fields of a small sign-up form.
pub fn signup_fields() -> FieldSet {
    FieldSet::new()
        .field(
            Element::text("username")
                .with_label("Username")
                .with_description("Choose a unique username")
                .with_filter(TrimFilter)
                .with_rule(RequiredRule::new())
                .with_rule(MinLengthRule::new(3)),
        )
        .and_then(|f| {
            f.field(
                Element::email("email")
                    .with_label("Email")
                    .with_filter(TrimFilter)
                    .with_filter(CaseLowerFilter)
                    .with_rule(RequiredRule::new())
                    .with_rule(EmailRule::new()),
            )
        })
        .and_then(|f| f.field(Element::textarea("bio", 4).with_label("Bio")))
        .unwrap_or_else(|e| panic!("Failed to build fields: {e}"))
}

/// Binds `pairs` and processes the fields.
pub fn submit(fields: &mut FieldSet, pairs: &[(&str, &str)]) -> bool {
    let data = PostedData::from_pairs(pairs.iter().copied());
    fields.bind(&data);
    fields.process()
}
