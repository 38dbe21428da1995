/// Bold emphasis with owned delimiter constant.
///
/// Bold is tried before italic, so `**x**` never parses as two italic runs.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8; 2] = b"**";
}

/// Italic emphasis with owned delimiter constant.
pub struct Emph;

impl Emph {
    pub const DELIM: u8 = b'*';
}
