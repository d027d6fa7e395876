use serde::{Deserialize, Serialize};

/// Tunable formatting behaviour.
///
/// Every field has a default, so a partial `[format]` table in a config file
/// deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Wrap column for action blocks.
    pub action_width: usize,
    /// Wrap column for dialogue blocks.
    pub dialogue_width: usize,
    /// Classify mixed-case lines that directly follow a character cue or
    /// parenthetical as dialogue instead of action.
    pub detect_dialogue: bool,
}

impl FormatOptions {
    pub const DEFAULT_ACTION_WIDTH: usize = 60;
    pub const DEFAULT_DIALOGUE_WIDTH: usize = 35;
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            action_width: Self::DEFAULT_ACTION_WIDTH,
            dialogue_width: Self::DEFAULT_DIALOGUE_WIDTH,
            detect_dialogue: false,
        }
    }
}
