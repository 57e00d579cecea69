use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use focus_core::{BionicIntensity, ChunkSize};

/// Turn documents into short, bionic-annotated reading chunks.
///
/// Supports PDF, DOCX, EPUB, MOBI/AZW, DjVu, Markdown and plain text.
#[derive(Parser, Debug)]
#[command(name = "focus-reader", version, about)]
pub struct CliArgs {
    /// Documents to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Chunk size: small, medium or large
    #[arg(long, short = 's')]
    pub size: Option<ChunkSize>,

    /// Bionic intensity: light, medium or strong
    #[arg(long, short = 'i')]
    pub intensity: Option<BionicIntensity>,

    /// Disable bionic bolding
    #[arg(long)]
    pub no_bionic: bool,

    /// Treat every file as this format (extension, e.g. "pdf") instead of
    /// sniffing each file's extension
    #[arg(long)]
    pub format: Option<String>,

    /// Output mode
    #[arg(long, short = 'o', value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,

    /// Print word count, chunk count and reading time
    #[arg(long)]
    pub stats: bool,

    /// Disable ANSI styling in text output
    #[arg(long)]
    pub no_color: bool,

    /// Path to config file (default: ~/.config/focus-reader/config.toml)
    #[arg(long)]
    pub config: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Styled terminal text
    Text,
    /// The reading document as JSON
    Json,
    /// A standalone HTML page
    Html,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_presets() {
        let args = CliArgs::try_parse_from([
            "focus-reader", "--size", "small", "-i", "strong", "--no-bionic", "-o", "json", "a.pdf", "b.epub",
        ])
        .unwrap();
        assert_eq!(args.size, Some(ChunkSize::Small));
        assert_eq!(args.intensity, Some(BionicIntensity::Strong));
        assert!(args.no_bionic);
        assert_eq!(args.output, OutputMode::Json);
        assert_eq!(args.files.len(), 2);
    }

    #[test]
    fn rejects_unknown_size() {
        assert!(CliArgs::try_parse_from(["focus-reader", "--size", "huge", "a.txt"]).is_err());
    }

    #[test]
    fn requires_a_file() {
        assert!(CliArgs::try_parse_from(["focus-reader"]).is_err());
    }

    #[test]
    fn defaults() {
        let args = CliArgs::try_parse_from(["focus-reader", "a.txt"]).unwrap();
        assert_eq!(args.output, OutputMode::Text);
        assert_eq!(args.size, None);
        assert!(!args.no_bionic);
    }
}
