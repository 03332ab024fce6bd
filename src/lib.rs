//! Minimal Markdown to HTML converter with a preview front end.

mod config;
mod counter;
mod markdown;
pub mod preview;
mod util;

pub use config::{Config, STDIN_PATH};
pub use counter::{CharacterCount, CounterLevel};
pub use markdown::{MarkdownRenderer, PIPELINE, Pass, PassKind, render};
pub use util::format_file_size;
