use serde::Serialize;

/// One node in the markup tree: a tag with attributes, optional text and
/// child elements.
///
/// Attributes keep their insertion order, which is also their render order.
/// Children are append-only; since a child is moved into its parent there is
/// no way to build a cycle through this API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
    void: bool,
}

impl Element {
    /// Create a new element with the given tag name
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: String::new(),
            void: false,
        }
    }

    /// Create a void element (rendered without a body or closing tag, e.g. img, br)
    pub fn new_void(tag: impl Into<String>) -> Self {
        let mut element = Self::new(tag);
        element.void = true;
        element
    }

    /// Set the `class` attribute from a list of class names, joined by single
    /// spaces in the given order (no deduplication)
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = classes
            .into_iter()
            .map(|class| class.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr("class", joined);
        self
    }

    /// Set an attribute, chaining style
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Set an attribute. A repeated key overwrites the earlier value but
    /// keeps the key's original position in the render order.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Set the text content, chaining style
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Set the text content. Rendered verbatim, before any children.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Set the text content with HTML entity escaping applied.
    ///
    /// Everything else in this crate renders verbatim; this is the one opt-in
    /// escape hatch for callers holding untrusted text.
    pub fn with_escaped_text(mut self, text: &str) -> Self {
        self.text = html_escape::encode_text(text).into_owned();
        self
    }

    /// Append a child element, chaining style
    pub fn with_child(mut self, child: Element) -> Self {
        self.push(child);
        self
    }

    /// Append a child element
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_void(&self) -> bool {
        self.void
    }

    /// Render this element and all descendants to markup text.
    ///
    /// An element with children renders as an opening tag line, its text,
    /// each child in order, then a closing tag line. A childless void element
    /// renders as a single tag line and drops any assigned text. Any other
    /// childless element renders on one line with its text between the tags.
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.render_into(&mut output);
        output
    }

    fn render_into(&self, output: &mut String) {
        let attrs = self.attribute_fragment();
        if !self.children.is_empty() {
            // Children force the open/body/close form even for void elements
            output.push_str(&format!("<{}{attrs}>\n", self.tag));
            output.push_str(&self.text);
            for child in &self.children {
                child.render_into(output);
            }
            output.push_str(&format!("</{}>\n", self.tag));
        } else if self.void {
            output.push_str(&format!("<{}{attrs}>\n", self.tag));
        } else {
            output.push_str(&format!("<{}{attrs}>{}</{}>\n", self.tag, self.text, self.tag));
        }
    }

    /// Leading space plus space-separated `key="value"` pairs, or empty when
    /// there are no attributes
    fn attribute_fragment(&self) -> String {
        if self.attributes.is_empty() {
            return String::new();
        }
        let pairs = self
            .attributes
            .iter()
            .map(|(key, value)| format!("{key}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ");
        format!(" {pairs}")
    }
}
