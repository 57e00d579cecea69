//! Paragraph, sentence and clause splitting used by the accumulator.

/// Sentence terminators.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Clause boundaries used only when a single sentence is too long.
const CLAUSE_DELIMITERS: [char; 5] = [',', ';', '—', '–', '-'];

/// Character count (not bytes).
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split on blank-line boundaries. Paragraphs are trimmed; empty ones are
/// dropped. Single newlines stay inside their paragraph.
pub(crate) fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n").trim().to_string());
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n").trim().to_string());
    }
    paragraphs.retain(|p| !p.is_empty());
    paragraphs
}

/// Split a paragraph into sentences.
///
/// A sentence ends after one or more of `.`, `!`, `?` followed by whitespace
/// or end of text. A terminator followed by anything else (`3.5`, `U.S.A`,
/// `."`) does not end a sentence. Trailing text without a terminator is kept
/// as a final sentence. Abbreviations are not special-cased, so `Dr. Smith`
/// splits after `Dr.`.
pub(crate) fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !TERMINATORS.contains(&c) {
            continue;
        }
        // Swallow the whole terminator run ("?!", "...").
        while let Some(&(_, next)) = chars.peek() {
            if TERMINATORS.contains(&next) {
                chars.next();
            } else {
                break;
            }
        }
        let boundary = match chars.peek() {
            None => Some(text.len()),
            Some(&(idx, next)) if next.is_whitespace() => Some(idx),
            Some(_) => None,
        };
        if let Some(end) = boundary {
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = end;
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

/// Split a sentence after each clause delimiter. Delimiters stay attached to
/// the fragment they end, and the fragments concatenate back to `sentence`.
pub(crate) fn split_clauses(sentence: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    for (idx, c) in sentence.char_indices() {
        if CLAUSE_DELIMITERS.contains(&c) {
            let end = idx + c.len_utf8();
            fragments.push(&sentence[start..end]);
            start = end;
        }
    }
    if start < sentence.len() {
        fragments.push(&sentence[start..]);
    }
    fragments
}
