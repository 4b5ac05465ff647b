//! Core types for GitQuest: entities, indexed collections, and session state.
//!
//! This crate defines the data model the trainer services operate on. It is
//! independent of any terminal concern — you can construct collections and
//! sessions programmatically or deserialize entities from JSON.

/// Badge entity with clamped point accumulation.
pub mod badge;
/// Generic ordered collection with a unique-key index.
pub mod collection;
/// Error types used throughout the crate.
pub mod error;
/// Glossary entries and their keyed collection.
pub mod glossary;
/// Point-value display formatting shared by badges and sessions.
pub mod points;
/// Quest entities and their keyed collection.
pub mod quest;
/// Per-run session state: history, completed quests, points.
pub mod session;

/// Re-export badge types.
pub use badge::Badge;
/// Re-export the generic collection types.
pub use collection::{IndexedCollection, Keyed};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export glossary types.
pub use glossary::{GlossaryCollection, GlossaryEntry};
/// Re-export quest types.
pub use quest::{Quest, QuestCollection};
/// Re-export session state.
pub use session::UserSession;
