use serde::{Deserialize, Serialize};

/// Tuning values for the heuristic rules.
///
/// The defaults were taken from observed scholarship content. None of them is
/// derived from a formal rule, so they are carried as data instead of literals
/// inside the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Candidates whose trimmed length (in chars) is at most this are dropped.
    pub noise_max_len: usize,
    /// A numbered item is split into title/body only above this word count.
    pub split_min_words: usize,
    /// Fewest words a split-off title may have.
    pub title_min_words: usize,
    /// Most words a split-off title may have.
    pub title_max_words: usize,
    /// The body must be at least this many times longer than the title.
    pub body_title_ratio: usize,
    /// Step lists need strictly more lines than this.
    pub step_min_lines: usize,
    /// Apply the corruption-token repair table (`nest`, `stop`, `–bulletin`).
    pub repair_artifacts: bool,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            noise_max_len: 10,
            split_min_words: 5,
            title_min_words: 2,
            title_max_words: 4,
            body_title_ratio: 2,
            step_min_lines: 3,
            repair_artifacts: true,
        }
    }
}
