// WHY: Turns tokenizer output files into sentence lists for accuracy scoring
// Understands plain one-per-line lists and seams aux files (index<TAB>sentence<TAB>span)

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TextPrepError};

/// On-disk layout of a sentence list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceListFormat {
    /// One sentence per line, blank lines ignored
    #[default]
    Lines,
    /// Seams aux file: `index<TAB>sentence<TAB>(start_line,start_col,end_line,end_col)`
    Seams,
}

/// Collapse line breaks and whitespace runs to single spaces, then trim
pub fn normalize_sentence(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_sentence_into(text, &mut result);
    result
}

/// Same as [`normalize_sentence`] but writes into a reusable buffer
pub fn normalize_sentence_into(text: &str, buffer: &mut String) {
    buffer.clear();

    let mut pending_space = false;
    // `\r\n` is whitespace on both bytes, so it collapses like any other run
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            buffer.push(' ');
            pending_space = false;
        }
        buffer.push(ch);
    }
}

/// Parse one line of a sentence list; `Ok(None)` for lines that carry no sentence.
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_sentence_line(
    line: &str,
    line_number: usize,
    format: SentenceListFormat,
    normalize: bool,
) -> Result<Option<String>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let sentence = match format {
        SentenceListFormat::Lines => line,
        SentenceListFormat::Seams => {
            let mut fields = line.splitn(3, '\t');
            let index = fields.next().unwrap_or_default();
            if index.trim().parse::<usize>().is_err() {
                return Err(TextPrepError::SentenceFormat {
                    line: line_number,
                    message: format!("invalid sentence index {index:?}"),
                });
            }
            fields.next().ok_or_else(|| TextPrepError::SentenceFormat {
                line: line_number,
                message: "missing sentence field".to_string(),
            })?
        }
    };

    Ok(Some(if normalize {
        normalize_sentence(sentence)
    } else {
        sentence.to_string()
    }))
}

/// Parse a whole in-memory sentence list
pub fn parse_sentence_list(
    content: &str,
    format: SentenceListFormat,
    normalize: bool,
) -> Result<Vec<String>> {
    let mut sentences = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if let Some(sentence) = parse_sentence_line(line, index + 1, format, normalize)? {
            sentences.push(sentence);
        }
    }
    Ok(sentences)
}
