use crate::parsing::patterns::re_heading;

/// `#`-prefixed heading line.
pub struct Heading;

impl Heading {
    pub const HASH: char = '#';
    /// Deeper `####` runs are left as paragraph text.
    pub const MAX_LEVEL: u8 = 3;

    /// Returns the heading level and the text after the hashes.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let caps = re_heading().captures(line)?;
        let level = u8::try_from(caps.get(1)?.as_str().len()).ok()?;
        let text = caps.get(2)?.as_str().trim();
        (level <= Self::MAX_LEVEL && !text.is_empty()).then_some((level, text))
    }
}
