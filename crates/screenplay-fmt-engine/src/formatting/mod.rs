pub mod elements;
pub mod options;
pub mod render;
pub mod validate;
pub mod wrap;

#[cfg(test)]
mod tests;

use serde::Serialize;

use elements::{BlockBuilder, ScreenplayLineClassifier, Segment};
use options::FormatOptions;
use render::Renderer;

/// Raw model output paired with its formatted rendering, as handed to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedPair {
    pub raw: String,
    pub formatted: String,
}

impl FormattedPair {
    pub fn new(raw: impl Into<String>, options: &FormatOptions) -> Self {
        let raw = raw.into();
        let formatted = format_document_with(&raw, options);
        Self { raw, formatted }
    }
}

/// Classifies `raw` into blocks and blank separators, in source order.
///
/// Lines are split on `\n` only, so a trailing newline yields a trailing
/// [`Segment::Blank`].
pub fn classify_document(raw: &str, options: &FormatOptions) -> Vec<Segment> {
    let classifier = ScreenplayLineClassifier;
    let mut builder = BlockBuilder::new().with_dialogue_detection(options.detect_dialogue);

    for line in raw.split('\n') {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}

/// Formats a full screenplay or a single scene with default options.
pub fn format_document(raw: &str) -> String {
    format_document_with(raw, &FormatOptions::default())
}

/// Formats a full screenplay or a single scene.
///
/// Never fails: text that matches no rule is formatted as action.
pub fn format_document_with(raw: &str, options: &FormatOptions) -> String {
    let segments = classify_document(raw, options);
    let renderer = Renderer::new(options);

    let rendered: Vec<String> = segments
        .iter()
        .map(|segment| match segment {
            Segment::Block(block) => renderer.render_block(block),
            Segment::Blank => String::new(),
        })
        .collect();

    log::debug!(
        "formatted {} segment(s) from {} byte(s)",
        segments.len(),
        raw.len()
    );
    rendered.join("\n")
}
