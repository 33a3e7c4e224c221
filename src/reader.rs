use std::fmt;
use std::io;
use std::ops::Deref;
use std::path::Path;
use std::time::Instant;

use memmap2::{Mmap, MmapOptions};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::error::Result;
use crate::sentences::{parse_sentence_line, SentenceListFormat};

/// Configuration for file reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Read whole documents through a read-only memory map instead of async buffered I/O
    pub use_mmap: bool,
    /// Buffer size for line-by-line reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            use_mmap: false,
            buffer_size: 8192,
        }
    }
}

/// Document text, either owned or borrowed from a read-only memory map
pub enum DocumentText {
    Owned(String),
    Mapped(MappedText),
}

impl DocumentText {
    pub fn as_str(&self) -> &str {
        match self {
            DocumentText::Owned(text) => text,
            DocumentText::Mapped(mapped) => mapped.as_str(),
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, DocumentText::Mapped(_))
    }
}

impl Deref for DocumentText {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for DocumentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentText")
            .field("mapped", &self.is_mapped())
            .field("bytes", &self.len())
            .finish()
    }
}

/// UTF-8 validated memory map; the mapping lives as long as this guard
pub struct MappedText {
    mmap: Mmap,
}

impl MappedText {
    /// Map `path` read-only and validate it as UTF-8 once
    pub fn open(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        // SAFETY: the mapping is read-only; the file must not be modified or truncated
        // by another process while this guard is alive
        let mmap = unsafe { MmapOptions::new().map(&file)? };
        std::str::from_utf8(&mmap).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Self { mmap })
    }

    pub fn as_str(&self) -> &str {
        // SAFETY: contents were validated as UTF-8 in `open` and the mapping is read-only
        unsafe { std::str::from_utf8_unchecked(&self.mmap) }
    }
}

/// Read a whole document as UTF-8 text.
///
/// With `use_mmap` the returned text borrows the mapping instead of copying it.
/// Invalid UTF-8 surfaces as an I/O error of kind `InvalidData` on both paths.
pub async fn read_text<P: AsRef<Path>>(path: P, config: &ReaderConfig) -> Result<DocumentText> {
    let path = path.as_ref();
    let start_time = Instant::now();

    debug!("Starting read of file: {}", path.display());

    let text = if config.use_mmap {
        DocumentText::Mapped(MappedText::open(path)?)
    } else {
        DocumentText::Owned(tokio::fs::read_to_string(path).await?)
    };

    info!(
        "Read {}: {} bytes in {}ms",
        path.display(),
        text.len(),
        start_time.elapsed().as_millis()
    );
    Ok(text)
}

/// Read a sentence list file line by line
pub async fn read_sentence_list<P: AsRef<Path>>(
    path: P,
    format: SentenceListFormat,
    normalize: bool,
    config: &ReaderConfig,
) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).await?;

    // WHY: BufReader with custom buffer size reduces syscalls on large tokenizer outputs
    let reader = BufReader::with_capacity(config.buffer_size, file);
    let mut lines = reader.lines();
    let mut sentences = Vec::new();
    let mut line_number = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        if let Some(sentence) = parse_sentence_line(&line, line_number, format, normalize)? {
            sentences.push(sentence);
        }
    }

    debug!(
        lines = line_number,
        sentences = sentences.len(),
        ?format,
        "Loaded sentence list from {}",
        path.display()
    );
    Ok(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TextPrepError;
    use tempfile::TempDir;

    async fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
        let file_path = dir.join(name);
        tokio::fs::write(&file_path, content).await.unwrap();
        file_path
    }

    #[tokio::test]
    async fn test_read_text_both_paths_agree() {
        let temp_dir = TempDir::new().unwrap();
        let content = "Hello, 世界!\n*** START OF THE PROJECT GUTENBERG EBOOK X ***\nBody";
        let path = create_test_file(temp_dir.path(), "book-0.txt", content.as_bytes()).await;

        let buffered = read_text(&path, &ReaderConfig::default()).await.unwrap();
        let mapped = read_text(&path, &ReaderConfig { use_mmap: true, ..Default::default() })
            .await
            .unwrap();

        assert!(!buffered.is_mapped());
        assert!(mapped.is_mapped());
        assert_eq!(buffered.as_str(), content);
        assert_eq!(&*mapped, content);
    }

    #[tokio::test]
    async fn test_read_text_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_test_file(temp_dir.path(), "bad-0.txt", &[0xFF, 0xFE, 0xFD]).await;

        for use_mmap in [false, true] {
            let config = ReaderConfig { use_mmap, ..Default::default() };
            match read_text(&path, &config).await {
                Err(TextPrepError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
                other => panic!("expected InvalidData, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_read_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_text(temp_dir.path().join("missing.txt"), &ReaderConfig::default()).await;
        assert!(matches!(result, Err(TextPrepError::Io(_))));
    }

    #[tokio::test]
    async fn test_read_sentence_list_small_buffer() {
        let temp_dir = TempDir::new().unwrap();
        let long = "x".repeat(2048);
        let content = format!("{long}\r\n\nShort one.\n");
        let path = create_test_file(temp_dir.path(), "hyp.txt", content.as_bytes()).await;

        let config = ReaderConfig { buffer_size: 1024, ..Default::default() };
        let sentences = read_sentence_list(&path, SentenceListFormat::Lines, false, &config)
            .await
            .unwrap();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].len(), 2048);
        assert_eq!(sentences[1], "Short one.");
    }
}
