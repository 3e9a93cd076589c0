//! The element registry of a request.

use tracing::{debug, warn};

use crate::element::Element;
use crate::error::{FormError, Result};
use crate::value::{PostedData, Value};

/// Owns the elements of one form, keyed by id in insertion order.
///
/// Rows borrow elements from here once binding and processing are done.
#[derive(Debug, Default)]
pub struct FieldSet {
    elements: Vec<Element>,
}

impl FieldSet {
    /// Creates an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element. Ids are write-once.
    pub fn add(&mut self, element: Element) -> Result<()> {
        if self.contains(element.id()) {
            warn!(element = element.id(), "duplicate element id");
            return Err(FormError::DuplicateElement(element.id().to_string()));
        }
        self.elements.push(element);
        Ok(())
    }

    /// Builder method to add an element.
    pub fn field(mut self, element: Element) -> Result<Self> {
        self.add(element)?;
        Ok(self)
    }

    /// Returns whether an element with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.elements.iter().any(|e| e.id() == id)
    }

    /// Returns the element with this id.
    pub fn get(&self, id: &str) -> Result<&Element> {
        self.elements
            .iter()
            .find(|e| e.id() == id)
            .ok_or_else(|| not_found(id))
    }

    /// Returns the element with this id for modification.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut Element> {
        self.elements
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| not_found(id))
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Copies submitted values onto the elements they belong to and returns
    /// how many elements received one. Submit buttons are skipped.
    ///
    /// Browsers leave out unchecked checkboxes and empty multi-selects, so a
    /// missing key binds those elements to an empty value instead of
    /// falling back to their default.
    pub fn bind(&mut self, data: &PostedData) -> usize {
        let bound = self.bind_with(|id| data.get(id).cloned());
        debug!(bound, submitted = data.len(), "bound posted values");
        bound
    }

    /// Binds `data` only when it carries the scope marker of `scope`.
    ///
    /// Keys namespaced under the scope (`scope[id]`) take precedence over
    /// bare ids. Returns how many elements received a value, `0` when the
    /// form was not submitted.
    pub fn bind_submitted(&mut self, data: &PostedData, scope: &str) -> usize {
        if !data.is_submitted(scope) {
            debug!(scope, "form not submitted");
            return 0;
        }

        let bound = self.bind_with(|id| {
            data.get(&format!("{scope}[{id}]"))
                .or_else(|| data.get(id))
                .cloned()
        });
        debug!(scope, bound, submitted = data.len(), "bound posted values");
        bound
    }

    fn bind_with(&mut self, lookup: impl Fn(&str) -> Option<Value>) -> usize {
        let mut bound = 0;
        for element in &mut self.elements {
            if !element.kind().accepts_input() {
                continue;
            }
            let value = lookup(element.id()).or_else(|| element.kind().omitted_value());
            match value {
                Some(value) => {
                    element.set_posted_value(value);
                    bound += 1;
                }
                None => element.clear_posted_value(),
            }
        }
        bound
    }

    /// Runs every element's filters and rules. Returns whether every
    /// element is valid afterwards.
    pub fn process(&mut self) -> bool {
        for element in &mut self.elements {
            element.process();
        }
        self.is_valid()
    }

    /// Returns whether no element has collected an error.
    pub fn is_valid(&self) -> bool {
        self.elements.iter().all(Element::is_valid)
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

fn not_found(id: &str) -> FormError {
    warn!(element = id, "element not found");
    FormError::ElementNotFound(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RequiredRule;

    #[test]
    fn test_duplicate_element() {
        let mut fields = FieldSet::new();
        fields.add(Element::text("name").with_label("First")).unwrap();
        let err = fields.add(Element::text("name")).unwrap_err();
        assert!(matches!(err, FormError::DuplicateElement(ref id) if id == "name"));
        assert_eq!(fields.get("name").unwrap().label(), Some("First"));
    }

    #[test]
    fn test_missing_element() {
        let fields = FieldSet::new();
        assert!(matches!(
            fields.get("nope"),
            Err(FormError::ElementNotFound(_))
        ));
    }

    #[test]
    fn test_bind_and_process() {
        let mut fields = FieldSet::new()
            .field(Element::text("name").with_rule(RequiredRule::new()))
            .unwrap()
            .field(Element::text("city").with_rule(RequiredRule::new()))
            .unwrap()
            .field(Element::submit("save", "Save"))
            .unwrap();

        let data = PostedData::from_pairs([("name", "Ada"), ("save", "1")]);
        assert_eq!(fields.bind(&data), 1);
        assert_eq!(
            fields.get("name").unwrap().value(),
            Some(&Value::from("Ada"))
        );
        assert!(!fields.get("save").unwrap().has_posted_value());

        assert!(!fields.process());
        assert!(fields.get("name").unwrap().is_valid());
        assert!(!fields.get("city").unwrap().is_valid());
    }

    #[test]
    fn test_unchecked_checkbox_overrides_default() {
        let mut fields = FieldSet::new()
            .field(
                Element::checkbox("terms")
                    .with_value("1")
                    .with_rule(RequiredRule::new()),
            )
            .unwrap()
            .field(Element::multi_select("tags", vec![("a", "A")]).with_value(vec!["a"]))
            .unwrap();

        let data = PostedData::from_pairs([("form[signup]", "1")]);
        assert_eq!(fields.bind(&data), 2);
        assert!(!fields.process());

        let terms = fields.get("terms").unwrap();
        assert_eq!(terms.value(), Some(&Value::from("")));
        assert!(!terms.is_valid());
        assert!(!terms.render().element.contains("checked"));

        let tags = fields.get("tags").unwrap();
        assert_eq!(tags.value(), Some(&Value::Sequence(Vec::new())));
        assert!(!tags.render().element.contains("selected"));
    }

    #[test]
    fn test_bind_submitted() {
        let mut fields = FieldSet::new()
            .field(Element::email("email"))
            .unwrap()
            .field(Element::text("name"))
            .unwrap()
            .field(Element::checkbox("news").with_value("1"))
            .unwrap();

        let data = PostedData::from_pairs([("signup[email]", "ada@example.com"), ("name", "Ada")]);
        assert_eq!(fields.bind_submitted(&data, "signup"), 0);
        assert!(!fields.get("news").unwrap().has_posted_value());

        let data = PostedData::from_pairs([
            ("form[signup]", "1"),
            ("signup[email]", "ada@example.com"),
            ("email", "ignored@example.com"),
            ("name", "Ada"),
        ]);
        assert_eq!(fields.bind_submitted(&data, "signup"), 3);
        assert_eq!(
            fields.get("email").unwrap().value(),
            Some(&Value::from("ada@example.com"))
        );
        assert_eq!(fields.get("name").unwrap().value(), Some(&Value::from("Ada")));
        assert_eq!(fields.get("news").unwrap().value(), Some(&Value::from("")));
    }

    #[test]
    fn test_get_mut() {
        let mut fields = FieldSet::new();
        fields.add(Element::text("name")).unwrap();
        fields.get_mut("name").unwrap().set_posted_value("x");
        assert_eq!(fields.iter().count(), 1);
        assert!(fields.get("name").unwrap().has_posted_value());
    }
}
