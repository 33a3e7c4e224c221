use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use textprep::{
    accuracy_report, count_entities, read_sentence_list, read_text, redact_usernames,
    scan_markers, DiscoveryConfig, MarkerFinder, ReaderConfig, SentenceListFormat,
};

#[derive(Parser, Debug)]
#[command(name = "textprep")]
#[command(about = "Corpus preparation and evaluation utilities for Project Gutenberg texts")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Locate the "*** START OF THE PROJECT GUTENBERG EBOOK ... ***" line
    Marker {
        file: PathBuf,

        /// Print the body text after the marker line instead of its span
        #[arg(long)]
        strip: bool,

        /// Use memory-mapped I/O instead of async buffered
        #[arg(long)]
        use_mmap: bool,
    },

    /// Report the start marker of every *-0.txt file under a directory
    Scan {
        root_dir: PathBuf,

        /// Abort on first error
        #[arg(long)]
        fail_fast: bool,

        /// Use memory-mapped I/O instead of async buffered
        #[arg(long)]
        use_mmap: bool,
    },

    /// Count capitalized tokens
    Entities {
        file: PathBuf,

        /// Only print the N most frequent entities
        #[arg(long)]
        top: Option<usize>,
    },

    /// Replace @handles with @user
    Redact { file: PathBuf },

    /// Score a tokenizer's sentences against a reference segmentation
    Accuracy {
        reference: PathBuf,
        hypothesis: PathBuf,

        /// Layout of both sentence list files
        #[arg(long, value_enum, default_value_t = SentenceListFormat::Lines)]
        format: SentenceListFormat,

        /// Collapse whitespace in every sentence before matching
        #[arg(long)]
        normalize: bool,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logs on stderr keep stdout clean for piping results
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    match args.command {
        Command::Marker { file, strip, use_mmap } => {
            let config = ReaderConfig { use_mmap, ..Default::default() };
            let text = read_text(&file, &config).await?;
            let finder = MarkerFinder::new()?;

            if strip {
                print!("{}", finder.strip_header(&text)?);
            } else {
                print_json(&finder.find(&text)?)?;
            }
        }

        Command::Scan { root_dir, fail_fast, use_mmap } => {
            if !root_dir.exists() {
                anyhow::bail!("Root directory does not exist: {}", root_dir.display());
            }

            let discovery_config = DiscoveryConfig { fail_fast };
            let reader_config = ReaderConfig { use_mmap, ..Default::default() };
            let records = scan_markers(&root_dir, &discovery_config, &reader_config).await?;

            for record in &records {
                print_json(record)?;
            }
        }

        Command::Entities { file, top } => {
            let text = read_text(&file, &ReaderConfig::default()).await?;
            let tally = count_entities(&text);
            let mut ranked = tally.most_common();
            if let Some(limit) = top {
                ranked.truncate(limit);
            }
            print_json(&ranked)?;
        }

        Command::Redact { file } => {
            let text = read_text(&file, &ReaderConfig::default()).await?;
            print!("{}", redact_usernames(&text));
        }

        Command::Accuracy { reference, hypothesis, format, normalize } => {
            let config = ReaderConfig::default();
            let reference = read_sentence_list(&reference, format, normalize, &config).await?;
            let hypothesis = read_sentence_list(&hypothesis, format, normalize, &config).await?;

            let report = accuracy_report(&reference, &hypothesis)?;
            info!(accuracy = report.accuracy, matched = report.matched, "Accuracy computed");
            print_json(&report)?;
        }
    }

    Ok(())
}
