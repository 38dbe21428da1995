//! Paragraph splitting: raw text → section candidates.
//!
//! Blank lines are the primary separator. Multi-line text without blank
//! lines is one candidate, since its line breaks already carry the structure.
//! Text that arrives as one single line (common for content pasted from PDFs
//! or single-field admin forms) goes through punctuation fallbacks instead,
//! tried in a fixed order.

use regex::Regex;
use serde::Serialize;

use super::{
    blocks::kinds::Numbered,
    patterns::{re_advert, re_blank_lines, re_clause_boundary, re_list_intro, re_sentence_boundary},
    thresholds::Thresholds,
};

/// A provisional, unclassified chunk of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionCandidate {
    /// Position among the candidates that survived filtering.
    pub index: usize,
    /// Trimmed candidate text; may still contain single newlines.
    pub text: String,
}

impl SectionCandidate {
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }
}

/// Splits raw input into section candidates.
///
/// Empty or whitespace-only input yields no candidates. Candidates at or below
/// `thresholds.noise_max_len` chars are dropped after the advertisement
/// placeholder is stripped.
pub fn split(raw: &str, thresholds: &Thresholds) -> Vec<SectionCandidate> {
    let text = raw.replace("\r\n", "\n");
    if text.trim().is_empty() {
        return vec![];
    }

    let pieces: Vec<&str> = if re_blank_lines().is_match(&text) {
        log::debug!("splitter: blank-line separation");
        re_blank_lines().split(&text).collect()
    } else if text.trim().contains('\n') {
        vec![text.trim()]
    } else {
        split_single_run(text.trim())
    };

    pieces
        .into_iter()
        .filter_map(|p| clean_candidate(p, thresholds.noise_max_len))
        .enumerate()
        .map(|(index, text)| SectionCandidate { index, text })
        .collect()
}

/// Fallback strategies for input without blank lines.
fn split_single_run(text: &str) -> Vec<&str> {
    if let Some(pieces) = split_list_intro(text) {
        log::debug!("splitter: list-intro fallback");
        return pieces;
    }
    let clauses = cut_at(text, re_clause_boundary());
    if clauses.len() > 1 {
        log::debug!("splitter: clause-boundary fallback ({} pieces)", clauses.len());
        return clauses;
    }
    let sentences = cut_at(text, re_sentence_boundary());
    if sentences.len() > 1 {
        log::debug!("splitter: sentence-pair fallback ({} sentences)", sentences.len());
        return pair_sentences(text, &sentences);
    }
    vec![text]
}

/// Isolates a sentence like "Submit the following:" from the list after it.
///
/// Returns `None` when no intro keyword is found or nothing follows it.
fn split_list_intro(text: &str) -> Option<Vec<&str>> {
    let m = re_list_intro().find(text)?;
    let body = text[m.end()..].trim();
    if body.is_empty() {
        return None;
    }

    let head = &text[..m.start()];
    let sentence_start = head
        .char_indices()
        .filter(|&(i, c)| {
            matches!(c, '.' | '!' | '?') && head[i + c.len_utf8()..].starts_with(char::is_whitespace)
        })
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);

    let mut pieces = vec![];
    let before = head[..sentence_start].trim();
    if !before.is_empty() {
        pieces.push(before);
    }
    pieces.push(text[sentence_start..m.end()].trim());
    pieces.push(body);
    Some(pieces)
}

/// Cuts `text` after group 1 of every match, restarting after group 2.
///
/// Both patterns passed here capture the punctuation as group 1 and the
/// following whitespace as group 2, so the capital letter starts the next piece.
/// A boundary that would cut off a bare list number (`1.`) is skipped.
fn cut_at<'a>(text: &'a str, re: &Regex) -> Vec<&'a str> {
    let mut pieces = vec![];
    let mut start = 0;
    for caps in re.captures_iter(text) {
        let (Some(punct), Some(gap)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        if Numbered::is_bare(&text[start..punct.end()]) {
            continue;
        }
        pieces.push(&text[start..punct.end()]);
        start = gap.end();
    }
    pieces.push(&text[start..]);
    pieces
}

/// Re-groups sentences two at a time, as slices of the original text.
fn pair_sentences<'a>(text: &'a str, sentences: &[&'a str]) -> Vec<&'a str> {
    sentences
        .chunks(2)
        .map(|pair| match pair {
            [first, second] => {
                let start = offset_in(text, first);
                let end = offset_in(text, second) + second.len();
                &text[start..end]
            }
            [only] => *only,
            _ => "",
        })
        .collect()
}

/// Byte offset of a subslice within its parent.
fn offset_in(parent: &str, child: &str) -> usize {
    child.as_ptr() as usize - parent.as_ptr() as usize
}

fn clean_candidate(piece: &str, noise_max_len: usize) -> Option<String> {
    let stripped = re_advert().replace(piece, "");
    let trimmed = stripped.trim();
    if trimmed.chars().count() <= noise_max_len {
        if !trimmed.is_empty() {
            log::trace!("splitter: dropping noise candidate {trimmed:?}");
        }
        return None;
    }
    Some(trimmed.to_string())
}
