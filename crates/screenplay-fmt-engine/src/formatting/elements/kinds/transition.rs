use std::sync::LazyLock;

use regex::Regex;

/// Transition element type with owned keyword list.
pub struct Transition;

impl Transition {
    /// Keywords a transition line may open with.
    pub const KEYWORDS: [&'static str; 8] = [
        "FADE TO BLACK",
        "MATCH CUT",
        "TIME CUT",
        "DISSOLVE",
        "SMASH",
        "FADE",
        "WIPE",
        "CUT",
    ];

    pub fn matches(line: &str) -> bool {
        KEYWORD.is_match(line)
    }
}

#[allow(clippy::expect_used)]
static KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    let keywords = Transition::KEYWORDS.join("|");
    Regex::new(&format!(r"(?i)^(?:{keywords})\b")).expect("valid regex: KEYWORD")
});
