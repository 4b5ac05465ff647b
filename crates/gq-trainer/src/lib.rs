//! Services and the interactive session for the GitQuest trainer.
//!
//! `QuestService` runs the current-quest state machine over the seeded quest
//! catalogue, `BadgeService` and `BadgeManager` turn quest completions into
//! clamped point awards, `GlossaryService` serves the command reference, and
//! `TrainerSession` ties them together behind a line-oriented menu.

pub mod badges;
pub mod error;
pub mod glossary;
pub mod quests;
pub mod session;

pub use badges::{BadgeManager, BadgeService, award_for_level};
pub use error::{TrainerError, TrainerResult};
pub use glossary::GlossaryService;
pub use quests::QuestService;
pub use session::TrainerSession;
