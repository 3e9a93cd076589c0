//! Rows: elements rendered side by side.

use ironhtml::html;
use ironhtml_elements::Div;
use tracing::warn;

use crate::element::Element;

/// Grid column names used by width hints.
const WIDTHS: [&str; 16] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
];

/// Returns the class fragment for a width hint of 1 to 16 columns.
pub fn width_class(width: u8) -> Option<String> {
    let index = usize::from(width).checked_sub(1)?;
    WIDTHS.get(index).map(|word| format!("{word} wide"))
}

/// An element placed in a row, with an optional width hint.
#[derive(Debug, Clone, Copy)]
pub struct RowElement<'a> {
    element: &'a Element,
    width: Option<u8>,
}

impl<'a> RowElement<'a> {
    /// Returns the element.
    pub fn element(&self) -> &'a Element {
        self.element
    }

    /// Returns the width hint.
    pub fn width(&self) -> Option<u8> {
        self.width
    }

    fn wrapper_class(&self) -> String {
        let mut class = Vec::with_capacity(3);
        if let Some(width) = self.width.and_then(width_class) {
            class.push(width);
        }
        class.push("field".to_string());
        if self.element.has_errors() {
            class.push("error".to_string());
        }
        class.join(" ")
    }

    fn render_body(&self) -> String {
        let rendered = self.element.render();
        let mut body = rendered.label.unwrap_or_default();
        body.push_str(&rendered.element);
        if let Some(description) = rendered.description {
            body.push_str(&description);
        }
        if self.element.has_errors() {
            body.push_str(&self.element.render_error_messages());
        }
        body
    }
}

/// An ordered sequence of borrowed elements.
#[derive(Debug, Clone, Default)]
pub struct Row<'a> {
    items: Vec<RowElement<'a>>,
}

impl<'a> Row<'a> {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an element.
    pub fn add(&mut self, element: &'a Element) {
        self.items.push(RowElement {
            element,
            width: None,
        });
    }

    /// Appends an element spanning `width` grid columns (1 to 16).
    pub fn add_with_width(&mut self, element: &'a Element, width: u8) {
        if width_class(width).is_none() {
            warn!(element = element.id(), width, "width hint out of range, ignored");
        }
        self.items.push(RowElement {
            element,
            width: Some(width),
        });
    }

    /// Builder method to append an element.
    #[must_use]
    pub fn element(mut self, element: &'a Element) -> Self {
        self.add(element);
        self
    }

    /// Builder method to append an element with a width hint.
    #[must_use]
    pub fn element_with_width(mut self, element: &'a Element, width: u8) -> Self {
        self.add_with_width(element, width);
        self
    }

    /// Returns the placed elements in declared order.
    pub fn items(&self) -> &[RowElement<'a>] {
        &self.items
    }

    /// Iterates over the elements in declared order.
    pub fn elements(&self) -> impl Iterator<Item = &'a Element> + '_ {
        self.items.iter().map(|item| item.element)
    }

    /// Returns whether any element of the row has errors.
    pub fn has_errors(&self) -> bool {
        self.elements().any(Element::has_errors)
    }

    /// Renders every element in declared order inside a `fields` wrapper.
    pub fn render(&self) -> String {
        let mut row = html! { div.class("fields") };

        for item in &self.items {
            let class = item.wrapper_class();
            let body = item.render_body();
            row = row.child::<Div, _>(|d| d.class(&class).raw(&body));
        }

        row.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RequiredRule;

    #[test]
    fn test_width_class() {
        assert_eq!(width_class(1).as_deref(), Some("one wide"));
        assert_eq!(width_class(8).as_deref(), Some("eight wide"));
        assert_eq!(width_class(16).as_deref(), Some("sixteen wide"));
        assert_eq!(width_class(0), None);
        assert_eq!(width_class(17), None);
    }

    #[test]
    fn test_wrapper_class() {
        let mut invalid = Element::text("b").with_rule(RequiredRule::new());
        invalid.process();
        let valid = Element::text("a");

        let row = Row::new()
            .element_with_width(&valid, 8)
            .element(&invalid);
        assert_eq!(row.items()[0].wrapper_class(), "eight wide field");
        assert_eq!(row.items()[1].wrapper_class(), "field error");
    }

    #[test]
    fn test_render_keeps_order() {
        let first = Element::text("first").with_label("First");
        let second = Element::text("second").with_label("Second");
        let html = Row::new().element(&first).element(&second).render();

        let a = html.find(r#"id="first""#).unwrap();
        let b = html.find(r#"id="second""#).unwrap();
        assert!(a < b);
        assert!(html.contains("fields"));
        assert!(html.contains(r#"<label for="first">First</label>"#));
    }

    #[test]
    fn test_render_includes_errors_only_when_invalid() {
        let mut invalid = Element::text("name").with_rule(RequiredRule::new());
        invalid.process();
        let html = Row::new().element(&invalid).render();
        assert!(html.contains("This field is required."));

        let valid = Element::text("name");
        let html = Row::new().element(&valid).render();
        assert!(!html.contains("rule-error-messages"));
    }

    #[test]
    fn test_has_errors() {
        let mut invalid = Element::text("b").with_rule(RequiredRule::new());
        invalid.process();
        let valid = Element::text("a");

        assert!(!Row::new().element(&valid).has_errors());
        assert!(Row::new().element(&valid).element(&invalid).has_errors());
    }
}
