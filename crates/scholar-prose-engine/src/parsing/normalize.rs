//! Line normalization: one candidate → cleaned lines with canonical markers.
//!
//! This is the only place that knows list glyph syntax. Later phases look at
//! [`LineMarker`] values and never at the raw glyphs.

use std::borrow::Cow;

use serde::Serialize;

use super::{
    blocks::kinds::{Bullet, ColonHeader, Numbered},
    patterns::re_artifact,
    split::SectionCandidate,
    thresholds::Thresholds,
};

/// Canonical tag for how a line starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineMarker {
    None,
    /// `•`, `-` or `*` glyph (stripped from the text).
    Bullet,
    /// `<n>.` prefix (stripped from the text).
    Numbered(u32),
    /// First line of a candidate shaped like `Some header:`.
    ColonHeader,
}

/// A single cleaned line within a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedLine {
    /// Trimmed text with internal whitespace collapsed and the marker removed.
    pub text: String,
    pub marker: LineMarker,
}

impl NormalizedLine {
    pub fn new(text: impl Into<String>, marker: LineMarker) -> Self {
        Self {
            text: text.into(),
            marker,
        }
    }

    #[must_use]
    pub fn is_bullet(&self) -> bool {
        self.marker == LineMarker::Bullet
    }

    #[must_use]
    pub fn number(&self) -> Option<u32> {
        match self.marker {
            LineMarker::Numbered(n) => Some(n),
            _ => None,
        }
    }
}

/// Replaces known upstream corruption tokens.
///
/// | token       | replacement      |
/// |-------------|------------------|
/// | `nest`      | line break       |
/// | `stop`      | paragraph break  |
/// | `–bulletin` | new bullet line  |
///
/// Tokens only count when whitespace (or the text edge) surrounds them, so
/// `one-stop` and `nest-egg` are left alone.
pub fn repair_artifacts(text: &str) -> Cow<'_, str> {
    let mut out = String::new();
    let mut last = 0;
    for m in re_artifact().find_iter(text) {
        if !is_standalone(text, &m) {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        match m.as_str() {
            "nest" => out.push('\n'),
            "stop" => out.push_str("\n\n"),
            _ => {
                out.push('\n');
                out.push(Bullet::CANONICAL);
                out.push(' ');
            }
        }
        last = m.end();
    }
    if last == 0 {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}

fn is_standalone(text: &str, m: &regex::Match<'_>) -> bool {
    let open = |c: Option<char>| c.is_none_or(char::is_whitespace);
    let before = text[..m.start()].chars().next_back();
    let after = text[m.end()..].chars().next();
    // The en dash already separates `–bulletin` from whatever precedes it.
    (m.as_str().starts_with('–') || open(before)) && open(after)
}

/// Normalizes a candidate into non-empty lines.
pub fn normalize(candidate: &SectionCandidate, thresholds: &Thresholds) -> Vec<NormalizedLine> {
    let text = if thresholds.repair_artifacts {
        repair_artifacts(&candidate.text)
    } else {
        Cow::Borrowed(candidate.text.as_str())
    };

    text.lines()
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .enumerate()
        .filter_map(|(i, line)| normalize_line(&line, i == 0))
        .collect()
}

fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Detects the leading marker of one collapsed line.
///
/// Returns `None` when stripping the marker leaves nothing behind.
fn normalize_line(line: &str, is_first: bool) -> Option<NormalizedLine> {
    let out = if let Some(rest) = Bullet::strip(line) {
        NormalizedLine::new(rest, LineMarker::Bullet)
    } else if let Some((n, rest)) = Numbered::strip(line) {
        NormalizedLine::new(rest, LineMarker::Numbered(n))
    } else if is_first && ColonHeader::matches(line) {
        NormalizedLine::new(line, LineMarker::ColonHeader)
    } else {
        NormalizedLine::new(line, LineMarker::None)
    };
    log::trace!("normalizer: {:?} <- {line:?}", out.marker);
    (!out.text.is_empty()).then_some(out)
}
