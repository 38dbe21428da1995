use super::{
    cursor::Cursor,
    kinds::{Emph, Strong},
    types::Span,
};

/// Parses a text field into a sequence of emphasis [`Span`]s.
///
/// # Delimiter Precedence
/// `**` is checked first. A `**` run without a closing pair is emitted as
/// literal text as a whole, so it is never re-read as two italic openers.
///
/// # Returns
/// Spans covering the whole input minus matched delimiters. Input without any
/// `*` comes back as a single plain span equal to the input, even when empty.
pub fn parse_inline(s: &str) -> Vec<Span> {
    if !s.as_bytes().contains(&Emph::DELIM) {
        return vec![Span::plain(s)];
    }

    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated literal text as a plain span
    fn flush_text(out: &mut Vec<Span>, text: &str) {
        if !text.is_empty() {
            out.push(Span::plain(text));
        }
    }

    while !cur.eof() {
        let at = cur.pos();
        if let Some((span, end)) = try_parse_strong(&cur) {
            flush_text(&mut out, &s[text_start..at]);
            out.push(span);
            cur.bump_n(end - at);
            text_start = end;
            continue;
        }
        if cur.starts_with(Strong::DELIM) {
            // Unclosed bold run stays literal
            cur.bump_n(Strong::DELIM.len());
            continue;
        }
        if let Some((span, end)) = try_parse_emph(&cur) {
            flush_text(&mut out, &s[text_start..at]);
            out.push(span);
            cur.bump_n(end - at);
            text_start = end;
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, &s[text_start..]);
    out
}

/// Attempts a `**bold**` run at the cursor.
///
/// Returns the span and the byte index just past the closing delimiter.
fn try_parse_strong(cur: &Cursor<'_>) -> Option<(Span, usize)> {
    if !cur.starts_with(Strong::DELIM) {
        return None;
    }
    let inner_start = cur.pos() + Strong::DELIM.len();
    let close = cur.find_from(inner_start, Strong::DELIM)?;
    let inner = &cur.s[inner_start..close];
    if inner.trim().is_empty() {
        return None;
    }
    Some((Span::bold(inner), close + Strong::DELIM.len()))
}

/// Attempts a `*italic*` run at the cursor.
///
/// The inner text must be non-empty and must not start or end with whitespace,
/// which keeps arithmetic like `2 * 3 * 4` literal.
fn try_parse_emph(cur: &Cursor<'_>) -> Option<(Span, usize)> {
    if cur.peek() != Some(Emph::DELIM) {
        return None;
    }
    let inner_start = cur.pos() + 1;
    let close = cur.find_from(inner_start, &[Emph::DELIM])?;
    let inner = &cur.s[inner_start..close];
    if inner.is_empty() || inner.trim().len() != inner.len() {
        return None;
    }
    Some((Span::italic(inner), close + 1))
}
