pub mod character_cue;
pub mod parenthetical;
pub mod scene_heading;
pub mod technical;
pub mod transition;

pub use character_cue::CharacterCue;
pub use parenthetical::Parenthetical;
pub use scene_heading::SceneHeading;
pub use technical::TechnicalDirection;
pub use transition::Transition;
