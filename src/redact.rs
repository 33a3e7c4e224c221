// WHY: Anonymizes social-media text before it enters a training corpus
// Every `@handle` becomes the fixed placeholder; surrounding punctuation is kept

use once_cell::sync::Lazy;
use regex_automata::meta::Regex;
use tracing::debug;

use crate::error::Result;

/// Handle pattern: `@` then one or more ASCII letters, digits or underscores
pub const HANDLE_PATTERN: &str = r"@[a-zA-Z0-9_]+";

/// Replacement text for every handle
pub const USER_PLACEHOLDER: &str = "@user";

static SHARED_REDACTOR: Lazy<UsernameRedactor> =
    Lazy::new(|| UsernameRedactor::new().expect("handle pattern is a valid regex"));

pub struct UsernameRedactor {
    regex: Regex,
}

impl UsernameRedactor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(HANDLE_PATTERN)?,
        })
    }

    /// Copy of `text` with each handle replaced by [`USER_PLACEHOLDER`]
    pub fn redact(&self, text: &str) -> String {
        let mut redacted = String::with_capacity(text.len());
        let mut last_end = 0;
        let mut mentions = 0usize;

        for found in self.regex.find_iter(text) {
            redacted.push_str(&text[last_end..found.start()]);
            redacted.push_str(USER_PLACEHOLDER);
            last_end = found.end();
            mentions += 1;
        }
        redacted.push_str(&text[last_end..]);

        debug!(mentions, "Redacted usernames");
        redacted
    }
}

/// Redact handles using a shared compiled pattern
pub fn redact_usernames(text: &str) -> String {
    SHARED_REDACTOR.redact(text)
}
