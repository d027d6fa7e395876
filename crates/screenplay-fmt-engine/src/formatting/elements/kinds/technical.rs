/// Technical direction: uppercase emphasis that is not a cue or transition.
pub struct TechnicalDirection;

impl TechnicalDirection {
    /// Lines must be longer than this many characters.
    pub const MIN_LEN: usize = 3;

    pub fn matches(line: &str) -> bool {
        line.chars().count() > Self::MIN_LEN
            && line.chars().any(char::is_alphabetic)
            && !line.chars().any(char::is_lowercase)
    }
}
