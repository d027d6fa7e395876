use super::{
    kinds::{CharacterCue, Parenthetical, SceneHeading, TechnicalDirection, Transition},
    types::ElementKind,
};

/// A predicate over a stripped, non-empty line paired with the kind it assigns.
type Rule = (fn(&str) -> bool, ElementKind);

/// Classification rules in priority order; the first match wins.
///
/// Lines matching none of these are [`ElementKind::Action`].
const RULES: [Rule; 5] = [
    (SceneHeading::matches, ElementKind::SceneHeading),
    (CharacterCue::matches, ElementKind::Character),
    (Parenthetical::matches, ElementKind::Parenthetical),
    (Transition::matches, ElementKind::Transition),
    (TechnicalDirection::matches, ElementKind::Technical),
];

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of formatting: each line is classified independently
/// without reference to surrounding lines. Position-aware decisions
/// (dialogue) happen in the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// Line text with leading and trailing whitespace stripped.
    pub text: String,
    /// Kind assigned by the rule table, `None` for a blank line.
    pub kind: Option<ElementKind>,
}

impl LineClass {
    pub fn is_blank(&self) -> bool {
        self.kind.is_none()
    }
}

/// Classifies individual lines for the block grouping phase.
pub struct ScreenplayLineClassifier;

impl ScreenplayLineClassifier {
    /// Classifies a raw line into a [`LineClass`].
    pub fn classify(&self, line: &str) -> LineClass {
        let text = line.trim();
        let kind = (!text.is_empty()).then(|| classify_text(text));
        LineClass {
            text: text.to_string(),
            kind,
        }
    }
}

/// Runs the rule table over an already-stripped, non-empty line.
pub fn classify_text(text: &str) -> ElementKind {
    RULES
        .iter()
        .find(|(matches, _)| matches(text))
        .map_or(ElementKind::Action, |&(_, kind)| kind)
}
