/// Parenthetical element type with owned delimiter constants.
pub struct Parenthetical;

impl Parenthetical {
    pub const OPEN: char = '(';
    pub const CLOSE: char = ')';

    /// Whether the line opens with `(` and closes with `)`.
    ///
    /// Inner parentheses are allowed: stacked parentheticals render as
    /// `(beat) (smiling)` and must classify the same way again.
    pub fn matches(line: &str) -> bool {
        line.strip_prefix(Self::OPEN)
            .and_then(|rest| rest.strip_suffix(Self::CLOSE))
            .is_some()
    }

    /// Wraps `text` in exactly one pair of parentheses.
    ///
    /// Any run of leading `(` or trailing `)` (and whitespace around them) is
    /// stripped first, so already-wrapped text is not doubled.
    pub fn normalize(text: &str) -> String {
        let inner = text
            .trim_start_matches(|c: char| c == Self::OPEN || c.is_whitespace())
            .trim_end_matches(|c: char| c == Self::CLOSE || c.is_whitespace());
        format!("{}{inner}{}", Self::OPEN, Self::CLOSE)
    }
}
