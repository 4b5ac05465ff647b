//! Quest management: the seeded catalogue and the current-quest state
//! machine.

use gq_core::{Quest, QuestCollection};

use crate::error::{TrainerError, TrainerResult};

/// Orchestrates the quest catalogue and one "current quest" slot.
///
/// The slot holds a quest *ID*, never the quest itself — if the quest is
/// removed from the collection underneath the slot, lookups degrade to an
/// [`TrainerError::UnknownQuest`] instead of dangling.
#[derive(Debug, Clone)]
pub struct QuestService {
    quests: QuestCollection,
    current: Option<String>,
    progress: f64,
}

impl QuestService {
    /// Create a service seeded with the three default quests.
    pub fn new() -> Self {
        let mut service = Self::with_collection(QuestCollection::new());
        service.seed_default_quests();
        service
    }

    /// Create a service over an existing collection, without seeding.
    pub fn with_collection(quests: QuestCollection) -> Self {
        Self {
            quests,
            current: None,
            progress: 0.0,
        }
    }

    /// Populate the default quest catalogue: `git-basics` (difficulty 1),
    /// `git-branching` (3), and `git-remote` (5).
    fn seed_default_quests(&mut self) {
        let seeds = [
            Quest::new(
                "git-basics",
                "Git Fundamentals",
                "Learn the essential Git commands to get started",
                vec![
                    "Learn git init to create a new repository".to_string(),
                    "Understand git add to stage files for commit".to_string(),
                    "Master git commit with meaningful messages".to_string(),
                    "Practice git status to check repository state".to_string(),
                ],
                1,
            ),
            Quest::new(
                "git-branching",
                "Git Branching & Merging",
                "Master branching and merging workflows",
                vec![
                    "Create new branches with git branch".to_string(),
                    "Switch between branches using git checkout".to_string(),
                    "Merge branches with git merge".to_string(),
                    "Resolve merge conflicts when they occur".to_string(),
                ],
                3,
            ),
            Quest::new(
                "git-remote",
                "Remote Repository Operations",
                "Work with remote repositories and collaboration",
                vec![
                    "Clone repositories with git clone".to_string(),
                    "Push changes to remote with git push".to_string(),
                    "Pull updates from remote with git pull".to_string(),
                    "Manage remotes with git remote".to_string(),
                    "Understand fetch vs pull operations".to_string(),
                ],
                5,
            ),
        ];
        for quest in seeds {
            // Seed IDs are distinct literals; adding cannot collide.
            let _ = self.quests.add(quest);
        }
    }

    /// The underlying collection.
    pub fn collection(&self) -> &QuestCollection {
        &self.quests
    }

    /// The underlying collection, mutably.
    pub fn collection_mut(&mut self) -> &mut QuestCollection {
        &mut self.quests
    }

    /// Defensive copy of all quests in catalogue order.
    pub fn all_quests(&self) -> Vec<Quest> {
        self.quests.all()
    }

    /// Look up a quest by ID.
    pub fn quest(&self, id: &str) -> Option<&Quest> {
        self.quests.get(id)
    }

    /// Quests with the given difficulty level.
    pub fn by_difficulty(&self, difficulty: u8) -> Vec<Quest> {
        self.quests.by_difficulty(difficulty)
    }

    /// Quests already completed.
    pub fn completed(&self) -> Vec<Quest> {
        self.quests.by_completion(true)
    }

    /// Quests not yet completed.
    pub fn incomplete(&self) -> Vec<Quest> {
        self.quests.by_completion(false)
    }

    /// Mark a quest completed by ID, independent of the current-quest slot.
    /// Idempotent: re-marking an already-completed quest still returns true.
    /// Returns false only when the ID does not resolve.
    ///
    /// This is deliberately a separate path from [`complete_current`]: the
    /// badge-award flow is keyed off quest IDs, not session state.
    ///
    /// [`complete_current`]: QuestService::complete_current
    pub fn mark_completed(&mut self, id: &str) -> bool {
        match self.quests.get_mut(id) {
            Some(quest) => {
                quest.completed = true;
                true
            }
            None => false,
        }
    }

    /// Start a quest, making it current and resetting progress to zero.
    ///
    /// Any previously active quest is abandoned silently — it does not need
    /// to be completed first.
    pub fn start_quest(&mut self, id: &str) -> TrainerResult<()> {
        if self.quests.get(id).is_none() {
            return Err(TrainerError::UnknownQuest(id.to_string()));
        }
        self.current = Some(id.to_string());
        self.progress = 0.0;
        Ok(())
    }

    /// The ID in the current-quest slot, if any.
    pub fn current_quest_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The current quest, resolved through the collection. Returns `None`
    /// when no quest is active or the active quest no longer exists.
    pub fn current_quest(&self) -> Option<&Quest> {
        self.current.as_deref().and_then(|id| self.quests.get(id))
    }

    /// Whether a quest is currently active.
    pub fn is_quest_active(&self) -> bool {
        self.current.is_some()
    }

    /// Complete the current quest: set its completed flag, clear the slot,
    /// reset progress. Returns the completed quest's ID.
    ///
    /// Errors with [`TrainerError::NoActiveQuest`] when the slot is empty,
    /// and with [`TrainerError::UnknownQuest`] (clearing the slot) when the
    /// active quest was deleted underneath the session.
    pub fn complete_current(&mut self) -> TrainerResult<String> {
        let id = self.current.take().ok_or(TrainerError::NoActiveQuest)?;
        self.progress = 0.0;
        match self.quests.get_mut(&id) {
            Some(quest) => {
                quest.completed = true;
                Ok(id)
            }
            None => Err(TrainerError::UnknownQuest(id)),
        }
    }

    /// Progress through the current quest, from 0.0 upward. Callers are
    /// responsible for clamping to 100%.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Set progress. Negative values are clamped to zero.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = progress.max(0.0);
    }

    /// Reset progress to zero.
    pub fn reset_progress(&mut self) {
        self.progress = 0.0;
    }
}

impl Default for QuestService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_exactly_three_quests() {
        let service = QuestService::new();
        assert_eq!(service.all_quests().len(), 3);

        let easy = service.by_difficulty(1);
        assert_eq!(easy.len(), 1);
        assert_eq!(easy[0].id, "git-basics");

        assert_eq!(service.by_difficulty(3)[0].id, "git-branching");
        assert_eq!(service.by_difficulty(5)[0].id, "git-remote");
    }

    #[test]
    fn seed_quests_carry_module_lists() {
        let service = QuestService::new();
        for quest in service.all_quests() {
            assert!(quest.modules.len() >= 4);
            assert!(!quest.completed);
        }
        assert_eq!(service.quest("git-remote").unwrap().modules.len(), 5);
    }

    #[test]
    fn with_collection_skips_seeding() {
        let service = QuestService::with_collection(QuestCollection::new());
        assert!(service.all_quests().is_empty());
    }

    #[test]
    fn start_quest_requires_known_id() {
        let mut service = QuestService::new();
        assert!(matches!(
            service.start_quest("git-rebase"),
            Err(TrainerError::UnknownQuest(_))
        ));
        assert!(!service.is_quest_active());

        service.start_quest("git-basics").unwrap();
        assert_eq!(service.current_quest_id(), Some("git-basics"));
        assert_eq!(service.progress(), 0.0);
    }

    #[test]
    fn starting_a_quest_abandons_the_previous_one() {
        let mut service = QuestService::new();
        service.start_quest("git-basics").unwrap();
        service.set_progress(60.0);

        service.start_quest("git-branching").unwrap();
        assert_eq!(service.current_quest_id(), Some("git-branching"));
        assert_eq!(service.progress(), 0.0);
        // The abandoned quest is not completed.
        assert!(!service.quest("git-basics").unwrap().completed);
    }

    #[test]
    fn complete_current_marks_and_clears() {
        let mut service = QuestService::new();
        service.start_quest("git-basics").unwrap();
        service.set_progress(100.0);

        let id = service.complete_current().unwrap();
        assert_eq!(id, "git-basics");
        assert!(service.quest("git-basics").unwrap().completed);
        assert!(!service.is_quest_active());
        assert_eq!(service.progress(), 0.0);
    }

    #[test]
    fn complete_current_without_active_quest_fails() {
        let mut service = QuestService::new();
        assert!(matches!(
            service.complete_current(),
            Err(TrainerError::NoActiveQuest)
        ));
    }

    #[test]
    fn complete_current_survives_quest_deletion() {
        let mut service = QuestService::new();
        service.start_quest("git-basics").unwrap();
        service.collection_mut().remove("git-basics").unwrap();

        assert!(matches!(
            service.complete_current(),
            Err(TrainerError::UnknownQuest(_))
        ));
        // The stale slot is cleared rather than left dangling.
        assert!(!service.is_quest_active());
    }

    #[test]
    fn current_quest_resolves_through_collection() {
        let mut service = QuestService::new();
        service.start_quest("git-branching").unwrap();
        assert_eq!(service.current_quest().unwrap().name, "Git Branching & Merging");

        service.collection_mut().remove("git-branching").unwrap();
        assert!(service.current_quest().is_none());
    }

    #[test]
    fn mark_completed_is_idempotent_and_slot_independent() {
        let mut service = QuestService::new();
        service.start_quest("git-branching").unwrap();

        assert!(service.mark_completed("git-basics"));
        assert!(service.mark_completed("git-basics"));
        assert!(service.quest("git-basics").unwrap().completed);
        // The current-quest slot is untouched.
        assert_eq!(service.current_quest_id(), Some("git-branching"));

        assert!(!service.mark_completed("git-rebase"));
    }

    #[test]
    fn progress_clamps_below_at_zero() {
        let mut service = QuestService::new();
        service.set_progress(-5.0);
        assert_eq!(service.progress(), 0.0);
        service.set_progress(150.0);
        assert_eq!(service.progress(), 150.0);
    }

    #[test]
    fn completed_and_incomplete_partition_the_catalogue() {
        let mut service = QuestService::new();
        service.mark_completed("git-basics");
        assert_eq!(service.completed().len(), 1);
        assert_eq!(service.incomplete().len(), 2);
    }

    #[test]
    fn all_quests_returns_a_copy() {
        let service = QuestService::new();
        let mut copy = service.all_quests();
        copy.clear();
        assert_eq!(service.all_quests().len(), 3);
    }
}
