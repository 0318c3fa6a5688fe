//! Append-only edits to plain-text configuration files.

use std::path::PathBuf;

use serde::Deserialize;

/// A commented block appended once to a file under the home directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfigEdit {
    /// Target file, relative to the home directory.
    pub file: PathBuf,
    /// Comment line written above the appended line (without the `#`).
    pub comment: String,
    /// The line being ensured.
    pub line: String,
    /// Substring whose presence means the edit is already applied.
    /// Defaults to `line`.
    #[serde(default)]
    pub marker: Option<String>,
}

impl ConfigEdit {
    pub fn new(file: impl Into<PathBuf>, comment: &str, line: &str) -> Self {
        Self { file: file.into(), comment: comment.to_string(), line: line.to_string(), marker: None }
    }

    pub fn with_marker(mut self, marker: &str) -> Self {
        self.marker = Some(marker.to_string());
        self
    }

    pub fn marker(&self) -> &str {
        self.marker.as_deref().unwrap_or(&self.line)
    }

    /// Whether `contents` already carries this edit.
    pub fn is_applied(&self, contents: &str) -> bool {
        contents.contains(self.marker())
    }

    /// The complete block to append: blank line, comment, line.
    ///
    /// A newline is prepended when `contents` does not already end with one,
    /// so the block never fuses with an unterminated last line.
    pub fn render_block(&self, contents: &str) -> String {
        let mut block = String::new();
        if !contents.is_empty() && !contents.ends_with('\n') {
            block.push('\n');
        }
        block.push('\n');
        block.push_str("# ");
        block.push_str(&self.comment);
        block.push('\n');
        block.push_str(&self.line);
        block.push('\n');
        block
    }
}
