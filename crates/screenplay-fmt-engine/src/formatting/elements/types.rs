use serde::Serialize;

/// The semantic kind of a screenplay block.
///
/// Exactly one kind is assigned per classified block; the kind alone decides
/// how the block is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    /// Location/time line such as `INT. KITCHEN - DAY`.
    SceneHeading,
    /// Short uppercase speaker cue.
    Character,
    /// Direction wrapped in parentheses, e.g. `(quietly)`.
    Parenthetical,
    /// Spoken lines following a character cue.
    Dialogue,
    /// Editing directive such as `CUT TO:`.
    Transition,
    /// Uppercase emphasis or technical direction that is not a cue or transition.
    Technical,
    /// Everything else (the default).
    Action,
}

impl ElementKind {
    /// Kinds after which a mixed-case line reads as dialogue.
    pub fn opens_dialogue(self) -> bool {
        matches!(self, Self::Character | Self::Parenthetical | Self::Dialogue)
    }
}

/// A run of consecutive, same-kind lines joined into one logical text unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    /// The kind every line of this block classified to.
    pub kind: ElementKind,
    /// Stripped source lines joined by a single space.
    pub text: String,
    /// Number of source lines folded into this block.
    pub line_count: usize,
}

/// One item of classifier output, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    /// A classified block of text.
    Block(Block),
    /// A blank source line, kept so the document shape survives rendering.
    Blank,
}
