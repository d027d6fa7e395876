//! # Element Classification
//!
//! Two-phase classification of raw screenplay text.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is stripped and run through
//!    an ordered rule table, producing a `LineClass` with local facts only
//!
//! 2. **Block Grouping** (`builder`): a `BlockBuilder` state machine coalesces
//!    consecutive same-kind lines into `Block`s, keeps blank lines as
//!    separators, and applies position-aware dialogue detection when enabled
//!
//! ## Modules
//!
//! - **`types`**: Core types (`ElementKind`, `Block`, `Segment`)
//! - **`kinds`**: Element-specific types that own their syntax (sluglines,
//!   cues, parentheticals, transitions, technical direction)
//! - **`classify`**: `ScreenplayLineClassifier` and the priority-ordered rule table
//! - **`builder`**: `BlockBuilder` state machine for block grouping
//!
//! ## Key Invariants
//!
//! - Every non-blank line lands in exactly one block
//! - Block order follows source order
//! - Classification is total: unmatched lines fall through to `Action`

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, ScreenplayLineClassifier, classify_text};
pub use types::{Block, ElementKind, Segment};
