pub mod accuracy;
pub mod discovery;
pub mod entities;
pub mod error;
pub mod marker;
pub mod reader;
pub mod redact;
pub mod sentences;

// Re-export the four text operations and their result types
pub use accuracy::{accuracy_report, sentence_accuracy, AccuracyReport};
pub use entities::{count_entities, EntityCounter, EntityTally};
pub use marker::{find_marker_span, strip_header, MarkerFinder, Span};
pub use redact::{redact_usernames, UsernameRedactor, USER_PLACEHOLDER};

pub use error::{Result, TextPrepError};

// Re-export file helpers used by the CLI and integration tests
pub use discovery::{discover_gutenberg_files, scan_markers, DiscoveryConfig, MarkerScanRecord};
pub use reader::{read_sentence_list, read_text, DocumentText, MappedText, ReaderConfig};
pub use sentences::{normalize_sentence, parse_sentence_list, SentenceListFormat};
