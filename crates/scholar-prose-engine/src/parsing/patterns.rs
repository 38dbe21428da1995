//! Compiled regular expressions shared by the splitter, normalizer and rules.
//!
//! Each accessor uses a `OnceLock` to compile the pattern at most once.

use regex::Regex;
use std::sync::OnceLock;

/// One or more blank lines between two runs of text.
pub(crate) fn re_blank_lines() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\n[ \t]*\n\s*").expect("re_blank_lines: pattern is valid and should always compile")
    })
}

/// A list-introducing keyword immediately followed by `:` or `;`.
pub(crate) fn re_list_intro() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:documents|following|requirements|submit|include|provide)[:;]")
            .expect("re_list_intro: pattern is valid and should always compile")
    })
}

/// `". "` or `"; "` followed by a capital letter.
pub(crate) fn re_clause_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([.;])(\s+)\p{Lu}")
            .expect("re_clause_boundary: pattern is valid and should always compile")
    })
}

/// Sentence-ending punctuation followed by a capital letter.
pub(crate) fn re_sentence_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([.!?])(\s+)\p{Lu}")
            .expect("re_sentence_boundary: pattern is valid and should always compile")
    })
}

/// Leading `- Advertisement -` placeholder left behind by ad slots.
pub(crate) fn re_advert() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*-\s*advertisement\s*-\s*")
            .expect("re_advert: pattern is valid and should always compile")
    })
}

/// Known upstream corruption tokens.
///
/// `\b` also matches at a hyphen; `repair_artifacts` rejects those hits.
pub(crate) fn re_artifact() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\bnest\b|\bstop\b|–bulletin\b")
            .expect("re_artifact: pattern is valid and should always compile")
    })
}

pub(crate) fn re_bullet() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:•\s*|[-*]\s+)(.*)$")
            .expect("re_bullet: pattern is valid and should always compile")
    })
}

pub(crate) fn re_numbered() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d+)\.\s+(.*)$")
            .expect("re_numbered: pattern is valid and should always compile")
    })
}

pub(crate) fn re_colon_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^:]+:$").expect("re_colon_header: pattern is valid and should always compile")
    })
}

pub(crate) fn re_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(#{1,3})\s+(.+)$")
            .expect("re_heading: pattern is valid and should always compile")
    })
}

/// Header words that turn a colon-header list into a document list.
pub(crate) fn re_document_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)document|requirement|certificate|proof|prepare|submit|following")
            .expect("re_document_header: pattern is valid and should always compile")
    })
}

/// Instruction verbs that mark step-by-step text.
pub(crate) fn re_step_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:step|click|visit|choose|apply|prepare|submit)\b")
            .expect("re_step_keyword: pattern is valid and should always compile")
    })
}
