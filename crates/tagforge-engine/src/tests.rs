//! Shared test helpers for the engine crate.

use crate::models::{Document, Element};
use tempfile::TempDir;

/// Create a temporary directory for sink output, cleaned up on drop
pub fn create_output_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// The canonical demonstration page used across rendering and sink tests
pub fn demo_document() -> Document {
    let head = Element::new("head").with_child(Element::new("title").with_text("hello"));

    let body = Element::new("body")
        .with_child(Element::new("h1").with_classes(["main-text"]).with_text("Test"))
        .with_child(
            Element::new("div")
                .with_classes(["container", "container-fluid"])
                .with_attr("id", "lead")
                .with_child(Element::new("p").with_text("another test"))
                .with_child(Element::new_void("img").with_attr("src", "/icon.png")),
        );

    Document::new().with_child(head).with_child(body)
}

/// Expected byte-for-byte render of [`demo_document`]
pub const DEMO_PAGE: &str = "<html>\n\
    <head>\n\
    <title>hello</title>\n\
    </head>\n\
    <body>\n\
    <h1 class=\"main-text\">Test</h1>\n\
    <div class=\"container container-fluid\" id=\"lead\">\n\
    <p>another test</p>\n\
    <img src=\"/icon.png\">\n\
    </div>\n\
    </body>\n\
    </html>\n";
