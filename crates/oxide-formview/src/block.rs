//! Blocks: named groups of rows within a form.

use ironhtml::html;

use crate::element::Element;
use crate::row::Row;

/// A named, ordered sequence of rows.
#[derive(Debug, Clone)]
pub struct Block<'a> {
    id: String,
    rows: Vec<Row<'a>>,
}

impl<'a> Block<'a> {
    /// Creates an empty block.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rows: Vec::new(),
        }
    }

    /// Returns the block id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Appends a row.
    pub fn add_row(&mut self, row: Row<'a>) {
        self.rows.push(row);
    }

    /// Builder method to append a row.
    #[must_use]
    pub fn row(mut self, row: Row<'a>) -> Self {
        self.add_row(row);
        self
    }

    /// Returns the rows in declared order.
    pub fn rows(&self) -> &[Row<'a>] {
        &self.rows
    }

    /// Iterates over every element of every row.
    pub fn elements(&self) -> impl Iterator<Item = &'a Element> + '_ {
        self.rows.iter().flat_map(Row::elements)
    }

    /// Returns whether any element of the block has errors.
    pub fn has_errors(&self) -> bool {
        self.rows.iter().any(Row::has_errors)
    }

    /// Renders the rows in declared order.
    pub fn render(&self) -> String {
        let body: String = self.rows.iter().map(Row::render).collect();

        html! { div.class("form-block") }
            .attr("data-block", &self.id)
            .raw(&body)
            .render()
    }
}
