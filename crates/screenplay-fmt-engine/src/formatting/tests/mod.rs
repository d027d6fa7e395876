//! Document-level tests for the formatting pipeline.
//!
//! Every test runs the classifier invariants over its input before checking
//! rendered output.


use pretty_assertions::assert_eq;

use crate::formatting::{
    FormattedPair, classify_document,
    elements::{ElementKind, Segment},
    format_document, format_document_with,
    options::FormatOptions,
};

const SCENE: &str = "fade in:

int. coffee shop - morning

Rain streaks the windows. A handful of regulars nurse their drinks while the espresso machine hisses in the corner.

MARA
(under her breath)
Not again.

She slides a folded note across the counter.

DANNY
You said that yesterday.

SMASH CUT TO:

EXT. ALLEY - CONTINUOUS

THE NOTE FLUTTERS DOWN INTO A PUDDLE AND THE INK BEGINS TO RUN
";

fn kinds(raw: &str, options: &FormatOptions) -> Vec<Option<ElementKind>> {
    let segments = classify_document(raw, options);
    invariants::check(raw, &segments);
    segments
        .iter()
        .map(|s| match s {
            Segment::Block(b) => Some(b.kind),
            Segment::Blank => None,
        })
        .collect()
}

#[test]
fn empty_document() {
    assert_eq!(format_document(""), "");
}

#[test]
fn blank_lines_only() {
    assert_eq!(format_document("\n\n\n"), "\n\n\n");
}

#[test]
fn whitespace_lines_become_empty_lines() {
    assert_eq!(format_document("  \n\t\nGo.\n"), "\n\nGo.\n");
}

#[test]
fn heading_cue_and_short_line() {
    let raw = "int. house - day\n\nJOHN\nHello there, how are you doing today my friend?\n";
    assert_eq!(
        format_document(raw),
        "INT. HOUSE - DAY\n\nJOHN\nHello there, how are you doing today my friend?\n"
    );
    assert_eq!(
        kinds(raw, &FormatOptions::default()),
        vec![
            Some(ElementKind::SceneHeading),
            None,
            Some(ElementKind::Character),
            Some(ElementKind::Action),
            None,
        ]
    );
}

#[test]
fn parenthetical_line_is_unchanged() {
    assert_eq!(format_document("(quietly)"), "(quietly)");
}

#[test]
fn long_uppercase_line_is_technical_and_unwrapped() {
    let raw = "THE ENTIRE CITY SKYLINE EXPLODES INTO A SHOWER OF SPARKS AND GLASS NOW";
    assert_eq!(
        kinds(raw, &FormatOptions::default()),
        vec![Some(ElementKind::Technical)]
    );
    assert_eq!(format_document(raw), raw);
}

#[test]
fn multi_line_action_is_rejoined_and_rewrapped() {
    let raw = "The hallway is dark.\nSomething moves at the far end,\nslow and deliberate, dragging one foot.";
    assert_eq!(
        format_document(raw),
        "The hallway is dark. Something moves at the far end, slow\nand deliberate, dragging one foot."
    );
}

#[test]
fn kind_change_inside_a_run_splits_blocks() {
    let raw = "MARA\n(under her breath)\nNot again.";
    assert_eq!(
        kinds(raw, &FormatOptions::default()),
        vec![
            Some(ElementKind::Character),
            Some(ElementKind::Parenthetical),
            Some(ElementKind::Action),
        ]
    );
}

#[test]
fn scene_formats_as_expected() {
    insta::assert_snapshot!(format_document(SCENE), @r"
    FADE IN:

    INT. COFFEE SHOP - MORNING

    Rain streaks the windows. A handful of regulars nurse their
    drinks while the espresso machine hisses in the corner.

    MARA
    (under her breath)
    Not again.

    She slides a folded note across the counter.

    DANNY
    You said that yesterday.

    SMASH CUT TO:

    EXT. ALLEY - CONTINUOUS

    THE NOTE FLUTTERS DOWN INTO A PUDDLE AND THE INK BEGINS TO RUN
    ");
}

#[test]
fn stacked_parentheticals_stay_one_block() {
    let raw = "MARA\n(beat)\n(smiling)\nFine.";
    let once = format_document(raw);
    assert_eq!(once, "MARA\n(beat) (smiling)\nFine.");
    assert_eq!(format_document(&once), once);
    assert_eq!(
        kinds(&once, &FormatOptions::default()),
        vec![
            Some(ElementKind::Character),
            Some(ElementKind::Parenthetical),
            Some(ElementKind::Action),
        ]
    );
}

#[test]
fn formatting_is_idempotent() {
    let once = format_document(SCENE);
    assert_eq!(format_document(&once), once);
}

#[test]
fn formatting_is_idempotent_with_dialogue_detection() {
    let options = FormatOptions {
        detect_dialogue: true,
        ..FormatOptions::default()
    };
    let once = format_document_with(SCENE, &options);
    assert_eq!(format_document_with(&once, &options), once);
}

#[test]
fn dialogue_detection_wraps_speech_at_dialogue_width() {
    let options = FormatOptions {
        detect_dialogue: true,
        ..FormatOptions::default()
    };
    let raw = "JOHN\nHello there, how are you doing today my friend?";
    assert_eq!(
        format_document_with(raw, &options),
        "JOHN\nHello there, how are you doing\ntoday my friend?"
    );
}

#[test]
fn blank_line_count_is_preserved() {
    let formatted = format_document(SCENE);
    let blanks = |s: &str| s.split('\n').filter(|l| l.trim().is_empty()).count();
    assert_eq!(blanks(&formatted), blanks(SCENE));
}

#[test]
fn formatted_pair_keeps_raw_text() {
    let pair = FormattedPair::new("int. house - day", &FormatOptions::default());
    assert_eq!(pair.raw, "int. house - day");
    assert_eq!(pair.formatted, "INT. HOUSE - DAY");
}
