use crate::models::Document;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Output target value that selects the standard output sink
pub const PRINT_TARGET: &str = "print";

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to open {path} for writing: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for a finalized document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

impl Sink {
    /// Parse an output target: the exact string `print` selects standard
    /// output, anything else is taken as a file path
    pub fn from_target(target: &str) -> Self {
        if target == PRINT_TARGET {
            Sink::Stdout
        } else {
            Sink::File(PathBuf::from(target))
        }
    }
}

/// Write a rendered document to the sink.
///
/// The output is dispatched as a sequence of writes: the root opening tag,
/// each top-level element's render individually, then the root closing tag.
/// A file sink is created (truncating any existing content) and closes on
/// every exit path; a failed write leaves no partially-repaired file behind.
pub fn write_document(document: &Document, sink: &Sink) -> Result<(), SinkError> {
    match sink {
        Sink::Stdout => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_parts(document, &mut handle)?;
            handle.flush()?;
            Ok(())
        }
        Sink::File(path) => {
            let mut file = File::create(path).map_err(|source| SinkError::Open {
                path: path.clone(),
                source,
            })?;
            write_parts(document, &mut file)?;
            file.flush()?;
            Ok(())
        }
    }
}

fn write_parts(document: &Document, writer: &mut impl Write) -> Result<(), std::io::Error> {
    writer.write_all(b"<html>\n")?;
    for child in document.children() {
        writer.write_all(child.render().as_bytes())?;
    }
    writer.write_all(b"</html>\n")?;
    Ok(())
}
