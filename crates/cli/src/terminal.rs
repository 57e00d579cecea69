use anyhow::Result;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use focus_core::BionicIntensity;
use focus_ingest::{annotate_spans, BionicSpan, ReadingDocument, ReadingStats};
use std::io::Write;

/// Color scheme for terminal output.
struct Colors;

impl Colors {
    const HEADER: Color = Color::Magenta;
    const DIM: Color = Color::DarkGrey;
    const STATS: Color = Color::Cyan;
    const ERROR: Color = Color::Red;
}

/// Writes reading documents as styled terminal text.
///
/// With `color` off every style command is skipped, so the output is plain
/// text suitable for pipes.
pub struct Terminal {
    color: bool,
}

impl Terminal {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn fg<W: Write>(&self, out: &mut W, color: Color) -> Result<()> {
        if self.color {
            queue!(out, SetForegroundColor(color))?;
        }
        Ok(())
    }

    fn reset<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.color {
            queue!(out, ResetColor)?;
        }
        Ok(())
    }

    fn bold<W: Write>(&self, out: &mut W, text: &str) -> Result<()> {
        if self.color {
            queue!(
                out,
                SetAttribute(Attribute::Bold),
                Print(text),
                SetAttribute(Attribute::NormalIntensity),
            )?;
        } else {
            queue!(out, Print(text))?;
        }
        Ok(())
    }

    /// Print the title line.
    pub fn print_header<W: Write>(&self, out: &mut W, doc: &ReadingDocument) -> Result<()> {
        self.fg(out, Colors::HEADER)?;
        queue!(out, Print(&doc.title))?;
        self.reset(out)?;
        self.fg(out, Colors::DIM)?;
        queue!(out, Print(format!(" ({}, {} chunks)\n", doc.format, doc.chunks.len())))?;
        self.reset(out)?;
        queue!(out, Print("\n"))?;
        Ok(())
    }

    /// Print every chunk, one block each, bolding word prefixes when
    /// `intensity` is set.
    pub fn print_chunks<W: Write>(
        &self,
        out: &mut W,
        doc: &ReadingDocument,
        intensity: Option<BionicIntensity>,
    ) -> Result<()> {
        let total = doc.chunks.len();
        for (i, chunk) in doc.chunks.iter().enumerate() {
            self.fg(out, Colors::DIM)?;
            queue!(out, Print(format!("[{}/{}] ", i + 1, total)))?;
            self.reset(out)?;

            match intensity {
                Some(intensity) => {
                    for span in annotate_spans(&chunk.content, intensity) {
                        match span {
                            BionicSpan::Bold(text) => self.bold(out, &text)?,
                            BionicSpan::Plain(text) => queue!(out, Print(text))?,
                        }
                    }
                }
                None => queue!(out, Print(&chunk.content))?,
            }
            queue!(out, Print("\n\n"))?;
        }
        Ok(())
    }

    pub fn print_stats<W: Write>(&self, out: &mut W, stats: &ReadingStats) -> Result<()> {
        self.fg(out, Colors::STATS)?;
        queue!(
            out,
            Print(format!(
                "{} words | {} paragraphs | {} chunks | ~{} min read\n",
                stats.words, stats.paragraphs, stats.chunks, stats.estimated_minutes
            ))
        )?;
        self.reset(out)?;
        Ok(())
    }

    /// Print a whole document: header, chunks, optional stats.
    pub fn print_document<W: Write>(
        &self,
        out: &mut W,
        doc: &ReadingDocument,
        intensity: Option<BionicIntensity>,
        show_stats: bool,
    ) -> Result<()> {
        self.print_header(out, doc)?;
        self.print_chunks(out, doc, intensity)?;
        if show_stats {
            self.print_stats(out, &doc.stats())?;
        }
        out.flush()?;
        Ok(())
    }

    /// Print an error message for one input.
    pub fn print_error<W: Write>(&self, out: &mut W, source: &str, message: &str) -> Result<()> {
        self.fg(out, Colors::ERROR)?;
        queue!(out, Print(format!("[error: {}] {}\n", source, message)))?;
        self.reset(out)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use focus_core::ReaderSettings;
    use focus_ingest::Pipeline;

    fn doc() -> ReadingDocument {
        Pipeline::new(ReaderSettings::default())
            .process(b"Focus on reading. One chunk at a time.", "notes.txt")
            .unwrap()
    }

    fn render(color: bool, intensity: Option<BionicIntensity>, stats: bool) -> String {
        let mut out = Vec::new();
        Terminal::new(color)
            .print_document(&mut out, &doc(), intensity, stats)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_output() {
        let text = render(false, Some(BionicIntensity::Medium), false);
        assert_eq!(
            text,
            "notes (text, 1 chunks)\n\n[1/1] Focus on reading. One chunk at a time.\n\n"
        );
    }

    #[test]
    fn test_colored_output_bolds_prefixes() {
        let text = render(true, Some(BionicIntensity::Medium), false);
        assert!(text.contains("\u{1b}[1mrea"));
        assert!(text.contains("notes"));
    }

    #[test]
    fn test_no_bionic_has_no_bold() {
        let text = render(true, None, false);
        assert!(!text.contains("\u{1b}[1m"));
        assert!(text.contains("Focus on reading. One chunk at a time."));
    }

    #[test]
    fn test_stats_line() {
        let text = render(false, None, true);
        assert!(text.ends_with("8 words | 1 paragraphs | 1 chunks | ~1 min read\n"));
    }

    #[test]
    fn test_error_line() {
        let mut out = Vec::new();
        Terminal::new(false)
            .print_error(&mut out, "scan.djvu", "no text layer")
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[error: scan.djvu] no text layer\n");
    }
}
