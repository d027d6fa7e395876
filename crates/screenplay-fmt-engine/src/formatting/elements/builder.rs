use super::{
    classify::LineClass,
    types::{Block, ElementKind, Segment},
};

#[derive(Debug, Clone)]
enum PendingState {
    None,
    Block { kind: ElementKind, lines: Vec<String> },
}

/// Groups classified lines into blocks.
///
/// State is the pending block's kind and buffered lines. A block is flushed
/// when a line of a different kind arrives, on a blank line, and at the end
/// of input.
pub struct BlockBuilder {
    detect_dialogue: bool,
    pending: PendingState,
    /// Kind of the last line pushed since the most recent blank line.
    previous: Option<ElementKind>,
    out: Vec<Segment>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            detect_dialogue: false,
            pending: PendingState::None,
            previous: None,
            out: vec![],
        }
    }

    /// Promote mixed-case lines after a cue or parenthetical to dialogue.
    pub fn with_dialogue_detection(mut self, enabled: bool) -> Self {
        self.detect_dialogue = enabled;
        self
    }

    pub fn push(&mut self, c: &LineClass) {
        let Some(kind) = c.kind else {
            self.flush();
            self.out.push(Segment::Blank);
            self.previous = None;
            return;
        };

        let kind = self.resolve(kind);
        self.previous = Some(kind);

        if let PendingState::Block {
            kind: pending,
            lines,
        } = &mut self.pending
            && *pending == kind
        {
            lines.push(c.text.clone());
            return;
        }

        self.flush();
        self.pending = PendingState::Block {
            kind,
            lines: vec![c.text.clone()],
        };
    }

    pub fn finish(mut self) -> Vec<Segment> {
        // EOF flush
        self.flush();
        self.out
    }

    fn resolve(&self, kind: ElementKind) -> ElementKind {
        let follows_speaker = self.previous.is_some_and(ElementKind::opens_dialogue);
        if self.detect_dialogue && kind == ElementKind::Action && follows_speaker {
            ElementKind::Dialogue
        } else {
            kind
        }
    }

    fn flush(&mut self) {
        if let PendingState::Block { kind, lines } =
            std::mem::replace(&mut self.pending, PendingState::None)
        {
            log::trace!("flushing {kind:?} block of {} line(s)", lines.len());
            self.out.push(Segment::Block(Block {
                kind,
                text: lines.join(" "),
                line_count: lines.len(),
            }));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
