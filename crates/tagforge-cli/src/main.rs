use anyhow::{Context, Result};
use std::{env, process};
use tagforge_config::Config;
use tagforge_engine::{Document, Element, Sink};

fn main() -> Result<()> {
    // Determine the output target from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let target = if args.len() == 2 {
        // CLI argument provided - use it
        args[1].clone()
    } else if args.len() == 1 {
        // No CLI argument - try config file, fall back to printing
        match Config::load() {
            Ok(Some(config)) => config.output,
            Ok(None) => Config::default().output,
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} [output]", args[0]);
                eprintln!("Or fix the config file at {}", config_path.display());
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [output]", args[0]);
        eprintln!("  output: 'print' for stdout, anything else is a file path");
        process::exit(1);
    };

    let sink = Sink::from_target(&target);
    demo_page()
        .finalize(&sink)
        .with_context(|| format!("Failed to write document to '{target}'"))?;

    Ok(())
}

/// The demonstration page: a head with a title plus a body with a heading
/// and a container holding a paragraph and an image
fn demo_page() -> Document {
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
