//! Standalone preview document for rendered markdown.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::counter::CharacterCount;

const PREVIEW_CSS: &str = include_str!("../assets/preview.css");

/// Wraps a rendered fragment in a complete HTML document.
///
/// The fragment is inserted verbatim. Anything that must be sanitized has
/// to be sanitized before it reaches this function.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `fragment`: HTML produced by the markdown renderer
/// * `count`: Optional character counter shown below the preview
///
/// # Returns
///
/// Complete HTML document with embedded stylesheet
pub fn page(title: &str, fragment: &str, count: Option<&CharacterCount>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Marklet" }
                style { (PreEscaped(PREVIEW_CSS)) }
            }
            body {
                div class="container" {
                    div class="markdown-preview card" {
                        (PreEscaped(fragment))
                    }
                    @if let Some(count) = count {
                        div class=(format!("form-text text-end {}", count.level().css_class())) {
                            (count.to_string())
                        }
                    }
                }
            }
        }
    }
}
