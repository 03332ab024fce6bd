//! Ordered substitution passes that make up the Markdown pipeline.
//!
//! Each pass rewrites the whole accumulated document and hands the result to
//! the next one. Later passes see markup inserted by earlier ones, so the
//! order of [`PIPELINE`] is part of the output contract.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

// Line-scoped captures stop before a trailing `\r` so CRLF input leaves none inside tags.
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,6}) (.*?)\r?$").unwrap());

static STRONG_ASTERISK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static STRONG_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.+?)__").unwrap());

// Content may not contain the delimiter, so `***` and `___` survive to later passes.
static EMPHASIS_ASTERISK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\n]+?)\*").unwrap());
static EMPHASIS_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^_\n]+?)_").unwrap());

static STRIKETHROUGH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.+?)~~").unwrap());

// Fence spans are matched first and kept verbatim so their backticks stay for the fence pass.
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```|`([^`\n]+?)`").unwrap());

static FENCED_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());

static UNORDERED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*-[ \t].*(?:\n[ \t]*-[ \t].*)*").unwrap());
static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*-[ \t](.*?)\r?$").unwrap());

static ORDERED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t].*(?:\n[ \t]*\d+\.[ \t].*)*").unwrap());
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*\d+\.[ \t](.*?)\r?$").unwrap());

static BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^>[ \t](.*?)\r?$").unwrap());

static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\*\*\*\r?$").unwrap());

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]+)\]\(([^)]+)\)").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").unwrap());

/// Syntactic scope of the construct a pass recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    /// Whole lines or multi-line spans (headings, lists, fences).
    Block,
    /// Spans inside a single line (emphasis, code, links).
    Inline,
}

/// One named step of the rendering pipeline.
#[derive(Clone, Copy)]
pub struct Pass {
    name: &'static str,
    kind: PassKind,
    apply: for<'a> fn(&'a str) -> Cow<'a, str>,
}

impl Pass {
    const fn new(
        name: &'static str,
        kind: PassKind,
        apply: for<'a> fn(&'a str) -> Cow<'a, str>,
    ) -> Self {
        Self { name, kind, apply }
    }

    /// Returns the pass name used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the construct scope of this pass.
    pub fn kind(&self) -> PassKind {
        self.kind
    }

    /// Applies the pass to the document.
    ///
    /// Returns borrowed input when nothing matched.
    pub fn apply<'a>(&self, html: &'a str) -> Cow<'a, str> {
        (self.apply)(html)
    }
}

impl std::fmt::Debug for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pass")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Rendering pipeline in application order.
///
/// Images run before links so link matching never sees `![alt](url)`.
/// Line breaks run last, after every multi-line construct is in place.
pub static PIPELINE: &[Pass] = &[
    Pass::new("headings", PassKind::Block, headings),
    Pass::new("strong", PassKind::Inline, strong),
    Pass::new("emphasis", PassKind::Inline, emphasis),
    Pass::new("strikethrough", PassKind::Inline, strikethrough),
    Pass::new("inline_code", PassKind::Inline, inline_code),
    Pass::new("fenced_code", PassKind::Block, fenced_code),
    Pass::new("unordered_list", PassKind::Block, unordered_list),
    Pass::new("ordered_list", PassKind::Block, ordered_list),
    Pass::new("blockquote", PassKind::Block, blockquote),
    Pass::new("horizontal_rule", PassKind::Block, horizontal_rule),
    Pass::new("images", PassKind::Inline, images),
    Pass::new("links", PassKind::Inline, links),
    Pass::new("line_breaks", PassKind::Block, line_breaks),
];

fn headings(html: &str) -> Cow<'_, str> {
    HEADING.replace_all(html, |caps: &Captures| {
        let level = caps[1].len();
        format!("<h{level}>{}</h{level}>", &caps[2])
    })
}

fn strong(html: &str) -> Cow<'_, str> {
    chain(html, &STRONG_ASTERISK, &STRONG_UNDERSCORE, "<strong>${1}</strong>")
}

fn emphasis(html: &str) -> Cow<'_, str> {
    chain(html, &EMPHASIS_ASTERISK, &EMPHASIS_UNDERSCORE, "<em>${1}</em>")
}

fn strikethrough(html: &str) -> Cow<'_, str> {
    STRIKETHROUGH.replace_all(html, "<del>${1}</del>")
}

fn inline_code(html: &str) -> Cow<'_, str> {
    INLINE_CODE.replace_all(html, |caps: &Captures| match caps.get(1) {
        Some(code) => format!("<code>{}</code>", code.as_str()),
        None => caps[0].to_string(),
    })
}

fn fenced_code(html: &str) -> Cow<'_, str> {
    FENCED_CODE.replace_all(html, "<pre><code>${1}</code></pre>")
}

fn unordered_list(html: &str) -> Cow<'_, str> {
    wrap_list_runs(html, &UNORDERED_RUN, &UNORDERED_ITEM, "ul")
}

fn ordered_list(html: &str) -> Cow<'_, str> {
    wrap_list_runs(html, &ORDERED_RUN, &ORDERED_ITEM, "ol")
}

fn blockquote(html: &str) -> Cow<'_, str> {
    BLOCKQUOTE.replace_all(html, "<blockquote><p>${1}</p></blockquote>")
}

fn horizontal_rule(html: &str) -> Cow<'_, str> {
    HORIZONTAL_RULE.replace_all(html, "<hr>")
}

fn images(html: &str) -> Cow<'_, str> {
    IMAGE.replace_all(html, r#"<img src="${2}" alt="${1}">"#)
}

fn links(html: &str) -> Cow<'_, str> {
    LINK.replace_all(html, r#"<a href="${2}" target="_blank">${1}</a>"#)
}

fn line_breaks(html: &str) -> Cow<'_, str> {
    LINE_BREAK.replace_all(html, "<br>")
}

/// Applies two patterns sharing one replacement, second over the output of the first.
fn chain<'a>(html: &'a str, first: &Regex, second: &Regex, replacement: &str) -> Cow<'a, str> {
    match first.replace_all(html, replacement) {
        Cow::Borrowed(unchanged) => second.replace_all(unchanged, replacement),
        Cow::Owned(rewritten) => {
            Cow::Owned(second.replace_all(&rewritten, replacement).into_owned())
        }
    }
}

/// Wraps every run of adjacent list lines in a single `tag` element.
///
/// Items of one run are concatenated without the newlines that separated
/// them. Text after the run, including its trailing newline, is untouched.
fn wrap_list_runs<'a>(html: &'a str, run: &Regex, item: &Regex, tag: &str) -> Cow<'a, str> {
    run.replace_all(html, |caps: &Captures| {
        let mut list = format!("<{tag}>");
        for line in caps[0].split('\n') {
            list.push_str(&item.replace(line, "<li>${1}</li>"));
        }
        list.push_str(&format!("</{tag}>"));
        list
    })
}
