//! Bionic reading: bold the leading part of every word.

use focus_core::{BionicIntensity, Chunk};
use serde::{Deserialize, Serialize};

/// A run of annotated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum BionicSpan {
    Plain(String),
    Bold(String),
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Number of leading characters to bold in a core word of `core_len` chars:
/// `ceil(core_len * ratio)`, at least 1.
pub fn bold_length(core_len: usize, intensity: BionicIntensity) -> usize {
    if core_len == 0 {
        return 0;
    }
    let pct = intensity.percent();
    ((core_len * pct).div_ceil(100)).max(1)
}

/// Split text into alternating whitespace / non-whitespace runs.
fn tokens(text: &str) -> impl Iterator<Item = (bool, &str)> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let is_space = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|&(_, c)| c.is_whitespace() != is_space)
            .map_or(rest.len(), |(i, _)| i);
        let (token, tail) = rest.split_at(end);
        rest = tail;
        Some((is_space, token))
    })
}

#[derive(Default)]
struct SpanBuilder {
    spans: Vec<BionicSpan>,
}

impl SpanBuilder {
    fn plain(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(BionicSpan::Plain(last)) = self.spans.last_mut() {
            last.push_str(text);
        } else {
            self.spans.push(BionicSpan::Plain(text.to_string()));
        }
    }

    fn bold(&mut self, text: &str) {
        if !text.is_empty() {
            self.spans.push(BionicSpan::Bold(text.to_string()));
        }
    }

    fn word(&mut self, token: &str, intensity: BionicIntensity) {
        let core_start = token
            .char_indices()
            .find(|&(_, c)| is_word_char(c))
            .map(|(i, _)| i);
        let Some(core_start) = core_start else {
            // Pure punctuation.
            self.plain(token);
            return;
        };
        let core_end = token
            .char_indices()
            .rev()
            .find(|&(_, c)| is_word_char(c))
            .map_or(token.len(), |(i, c)| i + c.len_utf8());

        let (leading, rest) = token.split_at(core_start);
        let (core, trailing) = rest.split_at(core_end - core_start);

        let bold_chars = bold_length(core.chars().count(), intensity);
        let split = core
            .char_indices()
            .nth(bold_chars)
            .map_or(core.len(), |(i, _)| i);
        let (head, tail) = core.split_at(split);

        self.plain(leading);
        self.bold(head);
        self.plain(tail);
        self.plain(trailing);
    }
}

/// Structured annotation of `content`. Whitespace passes through verbatim,
/// and concatenating all span texts gives back `content`.
pub fn annotate_spans(content: &str, intensity: BionicIntensity) -> Vec<BionicSpan> {
    let mut builder = SpanBuilder::default();
    for (is_space, token) in tokens(content) {
        if is_space {
            builder.plain(token);
        } else {
            builder.word(token, intensity);
        }
    }
    builder.spans
}

fn escape_html(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Render spans as inline HTML with `<b>` around the bold prefixes.
pub fn render_html(spans: &[BionicSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            BionicSpan::Plain(text) => escape_html(text, &mut out),
            BionicSpan::Bold(text) => {
                out.push_str("<b>");
                escape_html(text, &mut out);
                out.push_str("</b>");
            }
        }
    }
    out
}

/// Bionic-annotate `content` as inline HTML.
pub fn transform(content: &str, intensity: BionicIntensity) -> String {
    render_html(&annotate_spans(content, intensity))
}

/// Re-derive a chunk's annotation from its `content`. The previous
/// `bionic_content` is never read. `None` strips the annotation.
pub fn reannotate(chunk: &Chunk, intensity: Option<BionicIntensity>) -> Chunk {
    chunk.with_bionic_content(intensity.map(|i| transform(&chunk.content, i)))
}
