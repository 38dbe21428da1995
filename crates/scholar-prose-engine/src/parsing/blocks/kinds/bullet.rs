use crate::parsing::patterns::re_bullet;

/// Informal bullet glyphs.
///
/// `•` may be glued to its text; `-` and `*` need a following space so that
/// `**bold**` openers and hyphenated words are left alone.
pub struct Bullet;

impl Bullet {
    /// The glyph every bullet is normalized to.
    pub const CANONICAL: char = '•';

    /// Returns the text after the glyph, or `None` if the line is not a bullet.
    pub fn strip(line: &str) -> Option<&str> {
        re_bullet()
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    }
}
