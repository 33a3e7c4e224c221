// WHY: Capitalization heuristic for spotting proper nouns and abbreviations in raw text
// A token is an uppercase ASCII letter followed by any run of ASCII letters or periods

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex_automata::meta::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Entity token pattern; periods are absorbed so `U.S.A.` and `America.` stay whole
pub const ENTITY_PATTERN: &str = r"[A-Z][a-zA-Z.]*";

static SHARED_COUNTER: Lazy<EntityCounter> =
    Lazy::new(|| EntityCounter::new().expect("entity pattern is a valid regex"));

/// Occurrence count per entity token, keyed by the token exactly as found
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityTally {
    counts: HashMap<String, usize>,
}

impl EntityTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `token`
    pub fn add(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
            }
        }
    }

    /// Count for `token`, zero when absent
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// Tokens ordered by count descending, ties broken by token so output is stable
    pub fn most_common(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn into_inner(self) -> HashMap<String, usize> {
        self.counts
    }
}

impl<'a> FromIterator<&'a str> for EntityTally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Self::new();
        for token in iter {
            tally.add(token);
        }
        tally
    }
}

/// Compiled entity matcher
pub struct EntityCounter {
    regex: Regex,
}

impl EntityCounter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(ENTITY_PATTERN)?,
        })
    }

    /// Tally every maximal capitalized token in `text`, scanning left to right
    pub fn count(&self, text: &str) -> EntityTally {
        let tally: EntityTally = self
            .regex
            .find_iter(text)
            .map(|found| &text[found.range()])
            .collect();

        debug!(
            distinct = tally.len(),
            total = tally.total(),
            "Counted entities in {} bytes",
            text.len()
        );
        tally
    }
}

/// Tally capitalized tokens using a shared compiled pattern
pub fn count_entities(text: &str) -> EntityTally {
    SHARED_COUNTER.count(text)
}
