use std::sync::LazyLock;

use regex::Regex;

/// Character cue element type.
///
/// A cue is a short line of uppercase letters, digits, spaces and
/// parentheses, e.g. `JOHN` or `MARY (CONT)`.
pub struct CharacterCue;

impl CharacterCue {
    /// Cues must be strictly shorter than this many characters.
    pub const MAX_LEN: usize = 50;

    pub fn matches(line: &str) -> bool {
        line.chars().count() < Self::MAX_LEN && CUE.is_match(line)
    }
}

#[allow(clippy::expect_used)]
static CUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9 ()]+$").expect("valid regex: CUE"));
