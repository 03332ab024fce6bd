//! Minimal Markdown to HTML conversion.
//!
//! This module converts Markdown with an ordered pipeline of pattern
//! substitutions (headings, emphasis, code, lists, quotes, rules, links,
//! images, line breaks). It is not a CommonMark parser: there is no
//! precedence handling and no escaping, and malformed input yields best
//! effort markup instead of an error.

mod passes;
mod renderer;

pub use passes::{PIPELINE, Pass, PassKind};
pub use renderer::{MarkdownRenderer, render};
