//! Canonical text form shared by every extractor's output.

/// Normalize line endings and whitespace.
///
/// CRLF and lone CR become LF, runs of spaces/tabs collapse to one space,
/// every line is trimmed, three or more newlines collapse to a paragraph
/// break, and the result is trimmed. Content is never reordered, and
/// `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut collapsed = String::with_capacity(unified.len());
    let mut in_blank_run = false;
    for c in unified.chars() {
        if c == ' ' || c == '\t' {
            if !in_blank_run {
                collapsed.push(' ');
            }
            in_blank_run = true;
        } else {
            collapsed.push(c);
            in_blank_run = false;
        }
    }

    // Lines are trimmed before collapsing newlines: a whitespace-only line
    // must not survive as an extra blank line.
    let mut out = String::with_capacity(collapsed.len());
    let mut pending_newlines = 0usize;
    for line in collapsed.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            pending_newlines += 1;
            continue;
        }
        if !out.is_empty() {
            // `pending_newlines` counts the empty lines between two non-empty
            // ones; one separator newline is implied.
            let breaks = if pending_newlines == 0 { 1 } else { 2 };
            out.extend(std::iter::repeat('\n').take(breaks));
        }
        out.push_str(line);
        pending_newlines = 0;
    }
    out
}
