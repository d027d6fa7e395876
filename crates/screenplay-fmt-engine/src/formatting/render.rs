use super::{
    elements::{Block, ElementKind, kinds::Parenthetical},
    options::FormatOptions,
    wrap::wrap,
};

/// Renders classified blocks according to per-kind layout rules.
pub struct Renderer<'a> {
    options: &'a FormatOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(options: &'a FormatOptions) -> Self {
        Self { options }
    }

    /// Renders a block's joined text for its kind.
    ///
    /// Uppercased kinds are never wrapped; action and dialogue are wrapped at
    /// their configured widths and may span several output lines.
    pub fn render(&self, kind: ElementKind, text: &str) -> String {
        match kind {
            ElementKind::SceneHeading
            | ElementKind::Character
            | ElementKind::Transition
            | ElementKind::Technical => text.to_uppercase(),
            ElementKind::Parenthetical => Parenthetical::normalize(text),
            ElementKind::Dialogue => wrap(text, self.options.dialogue_width),
            ElementKind::Action => wrap(text, self.options.action_width),
        }
    }

    pub fn render_block(&self, block: &Block) -> String {
        self.render(block.kind, &block.text)
    }
}
