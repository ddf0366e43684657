use serde::Serialize;

use crate::io::{self, Sink, SinkError};
use crate::models::Element;

/// The root aggregator: an ordered list of top-level elements that renders
/// wrapped in a single `<html>` root tag.
///
/// `finalize` consumes the document, so a tree can be finalized at most once;
/// `render` only borrows, so inspecting or re-rendering before finalization
/// (or after a failed finalization attempt) is always possible.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    children: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level element
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Append a top-level element, chaining style
    pub fn with_child(mut self, child: Element) -> Self {
        self.push(child);
        self
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Render the whole document: the root tag wrapping each top-level
    /// element's render in insertion order
    pub fn render(&self) -> String {
        let mut output = String::from("<html>\n");
        for child in &self.children {
            output.push_str(&child.render());
        }
        output.push_str("</html>\n");
        output
    }

    /// Render and dispatch to the sink, consuming the document
    pub fn finalize(self, sink: &Sink) -> Result<(), SinkError> {
        io::write_document(&self, sink)
    }

    /// Scoped construction helper: builds a document, hands it to the
    /// closure for population, and finalizes it on the way out. Population
    /// itself cannot fail, so the only error source is the sink write.
    pub fn build<F>(sink: &Sink, populate: F) -> Result<(), SinkError>
    where
        F: FnOnce(&mut Document),
    {
        let mut document = Document::new();
        populate(&mut document);
        document.finalize(sink)
    }
}
