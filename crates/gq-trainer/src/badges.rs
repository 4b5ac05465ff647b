//! Badge bookkeeping and the quest-completion award flow.

use chrono::Utc;

use gq_core::collection::IndexedCollection;
use gq_core::{Badge, CoreResult};

use crate::quests::QuestService;

/// Points awarded per badge when a quest of the given difficulty level is
/// completed. Unknown levels award nothing.
pub fn award_for_level(level: u8) -> f64 {
    match level {
        1 => 5.0,
        3 => 7.5,
        5 => 10.0,
        _ => 0.0,
    }
}

/// Owns the badge catalogue and applies clamped point awards.
#[derive(Debug, Clone)]
pub struct BadgeService {
    badges: IndexedCollection<Badge>,
}

impl BadgeService {
    /// Create a service seeded with the default badge set.
    pub fn new() -> Self {
        let mut service = Self::empty();
        service.seed_default_badges();
        service
    }

    /// Create a service with no badges.
    pub fn empty() -> Self {
        Self {
            badges: IndexedCollection::new(),
        }
    }

    /// Populate the default badges tied to the seed quests.
    fn seed_default_badges(&mut self) {
        let seeds = [
            Badge::new(
                "git-starter",
                "Git Starter",
                "Complete your first Git quest",
                20.0,
                Some("git-basics".to_string()),
            ),
            Badge::new(
                "branch-expert",
                "Branch Expert",
                "Complete the branching quest",
                30.0,
                Some("git-branching".to_string()),
            ),
            Badge::new(
                "remote-pro",
                "Remote Pro",
                "Complete the remote operations quest",
                45.0,
                Some("git-remote".to_string()),
            ),
            Badge::new(
                "quest-master",
                "Quest Master",
                "Complete every quest",
                50.0,
                None,
            ),
        ];
        for badge in seeds {
            // Seed IDs are distinct literals; adding cannot collide.
            let _ = self.badges.add(badge);
        }
    }

    /// Add a badge. Fails on a blank or duplicate ID.
    pub fn add_badge(&mut self, badge: Badge) -> CoreResult<()> {
        self.badges.add(badge)
    }

    /// Look up a badge by ID.
    pub fn badge(&self, id: &str) -> Option<&Badge> {
        self.badges.get(id)
    }

    /// Defensive copy of all badges in catalogue order.
    pub fn all_badges(&self) -> Vec<Badge> {
        self.badges.all()
    }

    /// Badges fed by the given quest, in catalogue order.
    pub fn badges_for_quest(&self, quest_id: &str) -> Vec<Badge> {
        self.badges
            .filter(|b| b.quest_id.as_deref() == Some(quest_id))
    }

    /// Add points to a badge through the clamped accumulator. Stamps
    /// `date_earned` the first time the badge reaches its maximum. Returns
    /// false when the badge ID does not resolve.
    pub fn add_points(&mut self, badge_id: &str, amount: f64) -> bool {
        match self.badges.get_mut(badge_id) {
            Some(badge) => {
                badge.add_points(amount);
                if badge.is_maxed() && badge.date_earned.is_none() {
                    badge.date_earned = Some(Utc::now().date_naive());
                }
                true
            }
            None => false,
        }
    }

    /// Number of badges in the catalogue.
    pub fn len(&self) -> usize {
        self.badges.len()
    }

    /// Whether the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}

impl Default for BadgeService {
    fn default() -> Self {
        Self::new()
    }
}

/// Ties quest completion to badge awards.
///
/// Owns both services; the CLI reaches them through the accessors.
#[derive(Debug, Clone)]
pub struct BadgeManager {
    quests: QuestService,
    badges: BadgeService,
}

impl BadgeManager {
    /// Create a manager over the given services.
    pub fn new(quests: QuestService, badges: BadgeService) -> Self {
        Self { quests, badges }
    }

    /// The quest service.
    pub fn quests(&self) -> &QuestService {
        &self.quests
    }

    /// The quest service, mutably.
    pub fn quests_mut(&mut self) -> &mut QuestService {
        &mut self.quests
    }

    /// The badge service.
    pub fn badges(&self) -> &BadgeService {
        &self.badges
    }

    /// The badge service, mutably.
    pub fn badges_mut(&mut self) -> &mut BadgeService {
        &mut self.badges
    }

    /// React to a quest completion: mark the quest completed, then award
    /// every badge tied to it by the quest's difficulty level. Returns the
    /// points awarded per badge, or `None` when the quest ID does not
    /// resolve.
    ///
    /// Re-completing an already-completed quest still awards points (the
    /// badge clamp keeps totals bounded).
    pub fn on_quest_completed(&mut self, quest_id: &str) -> Option<f64> {
        if !self.quests.mark_completed(quest_id) {
            return None;
        }
        let difficulty = self.quests.quest(quest_id).map(|q| q.difficulty)?;
        let amount = award_for_level(difficulty);

        let badge_ids: Vec<String> = self
            .badges
            .all_badges()
            .into_iter()
            .filter(|b| b.quest_id.as_deref() == Some(quest_id))
            .map(|b| b.id)
            .collect();
        for id in &badge_ids {
            self.badges.add_points(id, amount);
        }
        Some(amount)
    }
}

impl Default for BadgeManager {
    fn default() -> Self {
        Self::new(QuestService::new(), BadgeService::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_table_matches_difficulty_levels() {
        assert_eq!(award_for_level(1), 5.0);
        assert_eq!(award_for_level(3), 7.5);
        assert_eq!(award_for_level(5), 10.0);
        assert_eq!(award_for_level(2), 0.0);
        assert_eq!(award_for_level(0), 0.0);
    }

    #[test]
    fn seeds_default_badges() {
        let service = BadgeService::new();
        assert_eq!(service.len(), 4);
        assert_eq!(service.badges_for_quest("git-basics").len(), 1);
        assert!(service.badge("quest-master").unwrap().quest_id.is_none());
    }

    #[test]
    fn completing_an_easy_quest_awards_five_points() {
        let mut manager = BadgeManager::default();
        let awarded = manager.on_quest_completed("git-basics").unwrap();
        assert_eq!(awarded, 5.0);
        assert_eq!(manager.badges().badge("git-starter").unwrap().points_earned, 5.0);
        assert!(manager.quests().quest("git-basics").unwrap().completed);
    }

    #[test]
    fn award_scales_with_difficulty() {
        let mut manager = BadgeManager::default();
        assert_eq!(manager.on_quest_completed("git-branching").unwrap(), 7.5);
        assert_eq!(manager.on_quest_completed("git-remote").unwrap(), 10.0);
        assert_eq!(
            manager.badges().badge("branch-expert").unwrap().points_earned,
            7.5
        );
        assert_eq!(manager.badges().badge("remote-pro").unwrap().points_earned, 10.0);
    }

    #[test]
    fn unknown_quest_awards_nothing() {
        let mut manager = BadgeManager::default();
        assert!(manager.on_quest_completed("git-rebase").is_none());
        assert_eq!(manager.badges().badge("git-starter").unwrap().points_earned, 0.0);
    }

    #[test]
    fn recompleting_stays_clamped_at_badge_max() {
        let mut manager = BadgeManager::default();
        // git-starter maxes at 20; five completions would be 25 unclamped.
        for _ in 0..5 {
            assert_eq!(manager.on_quest_completed("git-basics"), Some(5.0));
        }
        let badge = manager.badges().badge("git-starter").unwrap();
        assert_eq!(badge.points_earned, 20.0);
        assert!(badge.date_earned.is_some());
    }

    #[test]
    fn every_badge_on_the_same_quest_is_awarded() {
        let mut manager = BadgeManager::default();
        manager
            .badges_mut()
            .add_badge(Badge::new(
                "basics-encore",
                "Basics Encore",
                "Another badge on the basics quest",
                10.0,
                Some("git-basics".to_string()),
            ))
            .unwrap();

        manager.on_quest_completed("git-basics").unwrap();
        assert_eq!(manager.badges().badge("git-starter").unwrap().points_earned, 5.0);
        assert_eq!(
            manager.badges().badge("basics-encore").unwrap().points_earned,
            5.0
        );
    }

    #[test]
    fn invalid_difficulty_awards_zero() {
        let mut manager = BadgeManager::default();
        manager
            .quests_mut()
            .collection_mut()
            .get_mut("git-basics")
            .unwrap()
            .difficulty = 2;

        assert_eq!(manager.on_quest_completed("git-basics"), Some(0.0));
        assert_eq!(manager.badges().badge("git-starter").unwrap().points_earned, 0.0);
    }

    #[test]
    fn add_points_stamps_date_on_first_max() {
        let mut service = BadgeService::new();
        assert!(service.add_points("git-starter", 20.0));
        let badge = service.badge("git-starter").unwrap();
        assert!(badge.is_maxed());
        assert!(badge.date_earned.is_some());

        assert!(!service.add_points("no-such-badge", 5.0));
    }
}
