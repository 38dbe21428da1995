use serde::Serialize;

/// Emphasis state carried by a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// Text outside any delimiter pair.
    Plain,
    /// Text between `**` pairs.
    Bold,
    /// Text between single `*` pairs.
    Italic,
}

/// A run of text with a single emphasis state.
///
/// Spans never carry their delimiters: concatenating the `text` of every span
/// produced for a string reproduces that string minus the matched `*` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Plain,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Bold,
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Italic,
        }
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.emphasis == Emphasis::Plain
    }
}

/// Joins the visible text of a span run.
pub fn spans_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}
