use crate::parsing::patterns::re_colon_header;

/// A line such as `Required documents:` that introduces the lines below it.
pub struct ColonHeader;

impl ColonHeader {
    pub const COLON: char = ':';

    /// True when the whole line ends in its only colon.
    pub fn matches(line: &str) -> bool {
        re_colon_header().is_match(line)
    }
}
