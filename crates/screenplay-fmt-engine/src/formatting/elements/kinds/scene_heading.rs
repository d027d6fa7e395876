use std::sync::LazyLock;

use regex::Regex;

/// Scene heading element type with owned location prefixes and times of day.
///
/// All slugline syntax knowledge lives here, not in the classifier.
pub struct SceneHeading;

impl SceneHeading {
    /// Location prefixes, combined forms first so they win the alternation.
    pub const PREFIXES: [&'static str; 4] = ["INT/EXT", "EXT/INT", "INT", "EXT"];

    /// Time-of-day tokens, longer phrases first.
    pub const TIMES_OF_DAY: [&'static str; 10] = [
        "MOMENTS LATER",
        "SAME TIME",
        "CONTINUOUS",
        "MORNING",
        "EVENING",
        "NIGHT",
        "LATER",
        "DUSK",
        "DAWN",
        "DAY",
    ];

    /// Whether `line` opens with a location prefix and names a time of day.
    pub fn matches(line: &str) -> bool {
        SLUGLINE.is_match(line)
    }
}

// The prefix must be followed by `.` or whitespace, so `INTERIOR - DAY`
// falls through to Technical instead of opening a slugline.
#[allow(clippy::expect_used)]
static SLUGLINE: LazyLock<Regex> = LazyLock::new(|| {
    let prefixes = SceneHeading::PREFIXES.join("|");
    let times = SceneHeading::TIMES_OF_DAY.join("|");
    Regex::new(&format!(r"(?i)^(?:{prefixes})[.\s].*\b(?:{times})\b"))
        .expect("valid regex: SLUGLINE")
});
