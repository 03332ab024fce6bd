//! Markdown rendering through the substitution pipeline.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::path::Path;

use super::passes::{PIPELINE, Pass};

/// Renders markdown to an HTML fragment.
///
/// Stateless: every call runs the full pass pipeline over its own copy of
/// the input, so one renderer can be shared freely between callers. Output
/// is not escaped. Raw HTML in the input passes through verbatim and must be
/// sanitized by the caller before it reaches a live document.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer {
    passes: &'static [Pass],
}

impl MarkdownRenderer {
    /// Creates renderer using the standard pass pipeline.
    pub fn new() -> Self {
        Self { passes: PIPELINE }
    }

    /// Returns the passes in application order.
    pub fn passes(&self) -> &'static [Pass] {
        self.passes
    }

    /// Renders markdown content to HTML string.
    ///
    /// Never fails. Malformed markdown yields best effort markup, with
    /// unmatched delimiters left as literal characters.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML fragment
    pub fn render(&self, content: &str) -> String {
        tracing::debug!(bytes = content.len(), "rendering markdown");

        let mut html = content.to_owned();
        for pass in self.passes {
            let rewritten = match pass.apply(&html) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(rewritten) => rewritten,
            };
            tracing::trace!(pass = pass.name(), bytes = rewritten.len(), "pass applied");
            html = rewritten;
        }

        html
    }

    /// Renders markdown file at given path.
    ///
    /// Convenience method that reads file and renders content.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to markdown file
    ///
    /// # Returns
    ///
    /// Rendered HTML string
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or is not valid UTF8
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.render(&content))
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders markdown with the default renderer.
pub fn render(content: &str) -> String {
    MarkdownRenderer::new().render(content)
}
