//! Export the current ideas as a Word document

use docx_rs::{BreakType, Docx, Paragraph, Run};
use regex::Regex;
use std::io::Cursor;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // An unterminated tag runs to the end of the text
    Regex::new(r"</?[^>]+(>|$)").unwrap()
});

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,
    #[error("failed to write document: {0}")]
    Docx(String),
    #[error("failed to save {file_name}: {message}")]
    Save { file_name: String, message: String },
}

/// Remove markup tags, keeping the text between them
pub fn strip_tags(text: &str) -> String {
    TAG_PATTERN.replace_all(text, "").into_owned()
}

/// Hands finished files to the user (a browser download in the web app)
pub trait FileSaver {
    fn save(&self, file_name: &str, mime: &str, bytes: Vec<u8>) -> Result<(), ExportError>;
}

/// One section holding one paragraph of plain text
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDocument {
    paragraph: String,
}

impl ExportDocument {
    /// Strip markup from `text` and wrap it as the document's only paragraph
    pub fn from_text(text: &str) -> Self {
        Self {
            paragraph: strip_tags(text),
        }
    }

    pub fn paragraph(&self) -> &str {
        &self.paragraph
    }

    /// Serialize to `.docx` bytes. Line breaks become breaks inside the run.
    pub fn to_docx(&self) -> Result<Vec<u8>, ExportError> {
        let mut run = Run::new();
        for (i, line) in self.paragraph.split('\n').enumerate() {
            if i > 0 {
                run = run.add_break(BreakType::TextWrapping);
            }
            run = run.add_text(line);
        }

        let mut buf = Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(run))
            .build()
            .pack(&mut buf)
            .map_err(|e| ExportError::Docx(e.to_string()))?;

        let bytes = buf.into_inner();
        debug!("Built document: {} bytes", bytes.len());
        Ok(bytes)
    }
}
