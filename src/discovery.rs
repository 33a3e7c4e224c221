use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Result, TextPrepError};
use crate::marker::{MarkerFinder, Span};
use crate::reader::{read_text, ReaderConfig};

/// Suffix of Project Gutenberg UTF-8 text files
pub const GUTENBERG_SUFFIX: &str = "-0.txt";

/// Configuration for file discovery behavior
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
}

/// Start marker location for one discovered file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerScanRecord {
    pub path: PathBuf,
    pub span: Option<Span>,
    /// Document length in characters, zero when the file could not be read
    pub chars: usize,
    pub error: Option<String>,
}

/// Recursively find `*-0.txt` files under `root_dir`, sorted by path.
///
/// Unreadable directory entries are skipped with a warning unless `fail_fast` is set.
pub fn discover_gutenberg_files(
    root_dir: impl AsRef<Path>,
    config: &DiscoveryConfig,
) -> Result<Vec<PathBuf>> {
    let root_path = root_dir.as_ref();

    // WHY: validate root directory early to fail fast with a clear error
    if !root_path.is_dir() {
        return Err(TextPrepError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Root path is not a directory: {}", root_path.display()),
        )));
    }

    info!("Starting directory traversal in: {}", root_path.display());
    let mut files = Vec::new();

    for entry in WalkDir::new(root_path).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if config.fail_fast => return Err(e.into()),
            Err(e) => {
                warn!("Skipping unreadable entry (continuing): {}", e);
                continue;
            }
        };

        let is_gutenberg_text = entry.file_type().is_file()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(GUTENBERG_SUFFIX));

        if is_gutenberg_text {
            debug!("Found matching file: {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    files.sort();
    info!("Discovery completed, found {} files", files.len());
    Ok(files)
}

/// Locate the start marker in every discovered file.
///
/// Per-file failures (unreadable text, missing marker) are recorded in the
/// returned records; with `fail_fast` the first failure is returned instead.
pub async fn scan_markers(
    root_dir: impl AsRef<Path>,
    discovery_config: &DiscoveryConfig,
    reader_config: &ReaderConfig,
) -> Result<Vec<MarkerScanRecord>> {
    let files = discover_gutenberg_files(root_dir, discovery_config)?;
    let finder = MarkerFinder::new()?;
    let mut records = Vec::with_capacity(files.len());

    // WHY: sequential processing keeps memory bounded to one document at a time
    for path in files {
        let outcome = match read_text(&path, reader_config).await {
            Ok(text) => finder
                .find(&text)
                .map(|span| (span, text.chars().count())),
            Err(e) => Err(e),
        };

        let record = match outcome {
            Ok((span, chars)) => MarkerScanRecord {
                path,
                span: Some(span),
                chars,
                error: None,
            },
            Err(e) if discovery_config.fail_fast => return Err(e),
            Err(e) => {
                warn!("Marker scan failed for {}: {}", path.display(), e);
                MarkerScanRecord {
                    path,
                    span: None,
                    chars: 0,
                    error: Some(e.to_string()),
                }
            }
        };
        records.push(record);
    }

    let found = records.iter().filter(|r| r.span.is_some()).count();
    info!("Marker scan completed: {} of {} files have a start marker", found, records.len());
    Ok(records)
}
