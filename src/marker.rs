// WHY: Locates the Project Gutenberg start marker so the licence preamble can be dropped
// Offsets are reported in characters, not bytes, to match how the corpus is indexed downstream

use once_cell::sync::Lazy;
use regex_automata::meta::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TextPrepError};

/// Start marker line: literal prefix, any run on the same line, the closing ` ***`,
/// then whatever trails it up to the line break
/// WHY: `.` never crosses `\n`, so the greedy middle backtracks to the last ` ***` on the line
pub const MARKER_PATTERN: &str = r"\*\*\* START OF THE PROJECT GUTENBERG EBOOK.* \*\*\*.*";

static SHARED_FINDER: Lazy<MarkerFinder> =
    Lazy::new(|| MarkerFinder::new().expect("marker pattern is a valid regex"));

/// Half-open `[start, end)` range of character offsets into a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Substring of `text` covered by this span
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        let start = char_to_byte(text, self.start);
        let end = char_to_byte(text, self.end);
        text.get(start..end).unwrap_or("")
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}

fn char_to_byte(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(byte_pos, _)| byte_pos)
        .unwrap_or(text.len())
}

/// Compiled start-marker matcher, reusable across documents and threads
pub struct MarkerFinder {
    regex: Regex,
}

impl MarkerFinder {
    pub fn new() -> Result<Self> {
        let regex = Regex::new(MARKER_PATTERN)?;
        debug!("Compiled start marker pattern: {}", MARKER_PATTERN);
        Ok(Self { regex })
    }

    /// Span of the first start marker in `text`
    pub fn find(&self, text: &str) -> Result<Span> {
        let found = self.regex.find(text).ok_or(TextPrepError::MarkerNotFound)?;

        let start = text[..found.start()].chars().count();
        let end = start + text[found.range()].chars().count();

        debug!(start, end, "Located start marker");
        Ok(Span { start, end })
    }

    /// Document body after the marker line, with the single line break that ends it removed
    pub fn strip_header<'a>(&self, text: &'a str) -> Result<&'a str> {
        let found = self.regex.find(text).ok_or(TextPrepError::MarkerNotFound)?;
        let rest = &text[found.end()..];
        let body = rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
            .unwrap_or(rest);

        debug!(
            header_bytes = found.end(),
            body_bytes = body.len(),
            "Stripped Gutenberg header"
        );
        Ok(body)
    }
}

/// Span of the first start marker, using a shared compiled pattern
pub fn find_marker_span(text: &str) -> Result<Span> {
    SHARED_FINDER.find(text)
}

/// Body text following the start marker line, using a shared compiled pattern
pub fn strip_header(text: &str) -> Result<&str> {
    SHARED_FINDER.strip_header(text)
}
