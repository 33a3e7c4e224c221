// WHY: Scores a sentence tokenizer against gold segmentation without positional alignment
// Hypothesis sentences form a bag; each reference sentence consumes at most one matching entry

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TextPrepError};

/// Breakdown of a tokenizer accuracy computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyReport {
    /// Reference sentences credited against the hypothesis bag
    pub matched: usize,
    pub reference_len: usize,
    pub hypothesis_len: usize,
    /// `matched / reference_len`, always within `[0, 1]`
    pub accuracy: f64,
}

/// Remaining occurrences of each hypothesis sentence
struct SentenceBag<'a> {
    remaining: HashMap<&'a str, usize>,
}

impl<'a> SentenceBag<'a> {
    fn from_sentences<S: AsRef<str>>(sentences: &'a [S]) -> Self {
        let mut remaining = HashMap::with_capacity(sentences.len());
        for sentence in sentences {
            *remaining.entry(sentence.as_ref()).or_insert(0) += 1;
        }
        Self { remaining }
    }

    /// Remove one occurrence of `sentence`; false when none is left
    fn take(&mut self, sentence: &str) -> bool {
        match self.remaining.get_mut(sentence) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}

/// Match `reference` against `hypothesis` as multisets.
///
/// Fails with [`TextPrepError::EmptyReference`] when `reference` is empty.
/// Neither input is modified; consumption happens on an internal bag.
pub fn accuracy_report<R, H>(reference: &[R], hypothesis: &[H]) -> Result<AccuracyReport>
where
    R: AsRef<str>,
    H: AsRef<str>,
{
    if reference.is_empty() {
        return Err(TextPrepError::EmptyReference);
    }

    let mut bag = SentenceBag::from_sentences(hypothesis);
    let matched = reference
        .iter()
        .filter(|sentence| bag.take(sentence.as_ref()))
        .count();

    let accuracy = matched as f64 / reference.len() as f64;
    debug!(
        matched,
        reference_len = reference.len(),
        hypothesis_len = hypothesis.len(),
        accuracy,
        "Scored sentence tokenizer"
    );

    Ok(AccuracyReport {
        matched,
        reference_len: reference.len(),
        hypothesis_len: hypothesis.len(),
        accuracy,
    })
}

/// Fraction of reference sentences recoverable from the hypothesis list
pub fn sentence_accuracy<R, H>(reference: &[R], hypothesis: &[H]) -> Result<f64>
where
    R: AsRef<str>,
    H: AsRef<str>,
{
    accuracy_report(reference, hypothesis).map(|report| report.accuracy)
}
