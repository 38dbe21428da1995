use crate::parsing::patterns::re_numbered;

/// `<digits>.` list prefix.
pub struct Numbered;

impl Numbered {
    /// Returns the parsed number and the text after the prefix.
    ///
    /// Numbers that do not fit a `u32` are treated as ordinary text.
    pub fn strip(line: &str) -> Option<(u32, &str)> {
        let caps = re_numbered().captures(line)?;
        let n = caps.get(1)?.as_str().parse().ok()?;
        let rest = caps.get(2)?.as_str().trim();
        Some((n, rest))
    }

    /// True when `piece` is a list number with nothing after it, e.g. `12.`.
    pub fn is_bare(piece: &str) -> bool {
        piece
            .trim()
            .strip_suffix('.')
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
    }
}
