//! Line folds used by the list rules.
//!
//! Both folds walk `NormalizedLine`s once and carry the open group/item in the
//! accumulator value itself, so each step is a plain function of
//! `(accumulator, line)`.

use crate::parsing::{normalize::NormalizedLine, thresholds::Thresholds};

use super::kinds::ColonHeader;

/// A titled run of bullet lines, borrowing from the normalized lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGroup<'a> {
    pub title: &'a str,
    pub items: Vec<&'a str>,
}

#[derive(Debug)]
enum GroupAcc<'a> {
    Start,
    Open {
        done: Vec<RawGroup<'a>>,
        current: RawGroup<'a>,
    },
}

/// Folds lines into title + bullets groups.
///
/// Returns `None` as soon as the pattern breaks: a bullet before any title,
/// or a title that is not followed by at least one bullet.
pub fn group_lines(lines: &[NormalizedLine]) -> Option<Vec<RawGroup<'_>>> {
    let acc = lines.iter().try_fold(GroupAcc::Start, |acc, line| {
        match (acc, line.is_bullet()) {
            (GroupAcc::Start, false) => Some(GroupAcc::Open {
                done: vec![],
                current: RawGroup {
                    title: &line.text,
                    items: vec![],
                },
            }),
            (GroupAcc::Start, true) => None,
            (GroupAcc::Open { done, mut current }, true) => {
                current.items.push(&line.text);
                Some(GroupAcc::Open { done, current })
            }
            (GroupAcc::Open { mut done, current }, false) => {
                if current.items.is_empty() {
                    return None;
                }
                done.push(current);
                Some(GroupAcc::Open {
                    done,
                    current: RawGroup {
                        title: &line.text,
                        items: vec![],
                    },
                })
            }
        }
    })?;

    match acc {
        GroupAcc::Open { mut done, current } if !current.items.is_empty() => {
            done.push(current);
            Some(done)
        }
        _ => None,
    }
}

/// A numbered entry before title/body splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNumbered<'a> {
    pub index: u32,
    pub text: &'a str,
    /// Unnumbered lines that followed this entry.
    pub continuation: Vec<&'a str>,
}

/// Lines before the first numbered line, then the numbered entries.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawNumberedList<'a> {
    pub header: Vec<&'a str>,
    pub items: Vec<RawNumbered<'a>>,
}

/// Folds lines into numbered entries, accumulating continuation lines.
pub fn collect_numbered(lines: &[NormalizedLine]) -> RawNumberedList<'_> {
    lines
        .iter()
        .fold(RawNumberedList::default(), |mut acc, line| {
            if let Some(index) = line.number() {
                acc.items.push(RawNumbered {
                    index,
                    text: &line.text,
                    continuation: vec![],
                });
            } else if let Some(current) = acc.items.last_mut() {
                current.continuation.push(&line.text);
            } else {
                acc.header.push(&line.text);
            }
            acc
        })
}

/// Splits a numbered entry into a short title and a body.
///
/// Only entries longer than `split_min_words` words are split, and only at a
/// break where the body is at least `body_title_ratio` times the title length.
/// Break points are tried in this order: a leading `**bold**` phrase, a word
/// ending in `:`/`.` or followed by a dash, then plain word count. A break
/// never falls inside a `**bold**` or `*italic*` run. Returns `(text, "")`
/// when no break qualifies.
pub fn split_title(text: &str, thresholds: &Thresholds) -> (String, String) {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= thresholds.split_min_words {
        return (text.to_string(), String::new());
    }

    let long_enough = |title: &str, body: &str| {
        !body.is_empty()
            && body.chars().count() >= thresholds.body_title_ratio * title.chars().count()
    };

    if let Some((title, body)) = bold_lead(text) {
        let lead_words = title.split_whitespace().count();
        if lead_words <= thresholds.title_max_words && long_enough(&title, &body) {
            return (title, body);
        }
    }

    let max_k = thresholds.title_max_words.min(words.len() - 1);
    let min_k = thresholds.title_min_words.max(1);

    for k in (min_k..=max_k).filter(|&k| balanced_emphasis(&words[..k])) {
        let last = words[k - 1];
        let dash_follows = is_dash(words[k]);
        if !(last.ends_with(ColonHeader::COLON) || last.ends_with('.') || dash_follows) {
            continue;
        }
        let title = words[..k].join(" ");
        let title = title.trim_end_matches([ColonHeader::COLON, '.']).to_string();
        let skip = usize::from(dash_follows);
        let body = words[k + skip..].join(" ");
        if long_enough(&title, &body) {
            return (title, body);
        }
    }

    for k in (min_k..=max_k).filter(|&k| balanced_emphasis(&words[..k])) {
        let title = words[..k].join(" ");
        let body = words[k..].join(" ");
        if long_enough(&title, &body) {
            return (title, body);
        }
    }

    (text.to_string(), String::new())
}

/// Every `**` and `*` opened in `words` is also closed there.
fn balanced_emphasis(words: &[&str]) -> bool {
    let text = words.concat();
    let strong = text.matches("**").count();
    let emph = text.replace("**", "").matches('*').count();
    strong % 2 == 0 && emph % 2 == 0
}

fn is_dash(word: &str) -> bool {
    matches!(word, "-" | "–" | "—")
}

/// `**Lead phrase:** rest` → (`**Lead phrase**`, `rest`).
fn bold_lead(text: &str) -> Option<(String, String)> {
    let inner_and_rest = text.strip_prefix("**")?;
    let close = inner_and_rest.find("**")?;
    let inner = inner_and_rest[..close]
        .trim()
        .trim_end_matches(ColonHeader::COLON)
        .trim_end();
    if inner.is_empty() {
        return None;
    }
    let rest = inner_and_rest[close + 2..]
        .trim_start_matches([ColonHeader::COLON, '-', '–', '—'])
        .trim();
    Some((format!("**{inner}**"), rest.to_string()))
}
