use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::points::format_points;

/// The in-memory record of one run's progress: command history, the active
/// quest, completed quests, and accumulated points.
///
/// The session references quests by ID only — it never owns quest data, and a
/// quest deleted from its collection simply stops resolving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    user_id: String,
    start_time: DateTime<Utc>,
    last_activity: DateTime<Utc>,
    command_history: Vec<String>,
    total_commands: u64,
    is_active: bool,
    current_quest_id: Option<String>,
    completed_quests: Vec<String>,
    total_points: f64,
}

impl UserSession {
    /// Start a new, active session for the given user.
    pub fn new(user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.into(),
            start_time: now,
            last_activity: now,
            command_history: Vec::new(),
            total_commands: 0,
            is_active: true,
            current_quest_id: None,
            completed_quests: Vec::new(),
            total_points: 0.0,
        }
    }

    /// The user this session belongs to.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// When the session started.
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// When the session last saw a command.
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }

    /// Every command entered this session, in order.
    pub fn command_history(&self) -> &[String] {
        &self.command_history
    }

    /// Total commands entered this session.
    pub fn total_commands(&self) -> u64 {
        self.total_commands
    }

    /// Whether the session is still active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// The quest currently being worked on, if any.
    pub fn current_quest_id(&self) -> Option<&str> {
        self.current_quest_id.as_deref()
    }

    /// Set or clear the quest currently being worked on.
    pub fn set_current_quest(&mut self, quest_id: Option<String>) {
        self.current_quest_id = quest_id;
    }

    /// Completed quest IDs in the order they were first completed. Each ID
    /// appears at most once.
    pub fn completed_quests(&self) -> &[String] {
        &self.completed_quests
    }

    /// Points accumulated this session.
    pub fn total_points(&self) -> f64 {
        self.total_points
    }

    /// Record a command: append to history, bump the counter, refresh the
    /// activity timestamp.
    pub fn add_command(&mut self, command: impl Into<String>) {
        self.command_history.push(command.into());
        self.total_commands += 1;
        self.last_activity = Utc::now();
    }

    /// Record a quest as completed. Idempotent: marking the same ID again
    /// changes nothing, and blank IDs are ignored.
    pub fn mark_quest_completed(&mut self, quest_id: &str) {
        if quest_id.trim().is_empty() {
            return;
        }
        if !self.completed_quests.iter().any(|id| id == quest_id) {
            self.completed_quests.push(quest_id.to_string());
        }
    }

    /// Whether the given quest has been completed this session.
    pub fn has_completed(&self, quest_id: &str) -> bool {
        self.completed_quests.iter().any(|id| id == quest_id)
    }

    /// Add to the point total. Fractional amounts are fine; no clamping at
    /// this layer.
    pub fn add_points(&mut self, amount: f64) {
        self.total_points += amount;
    }

    /// Fixed-format progress line:
    /// `Total Points: {points} | Badges Earned: {completed-quest count}`.
    pub fn points_summary(&self) -> String {
        format!(
            "Total Points: {} | Badges Earned: {}",
            format_points(self.total_points),
            self.completed_quests.len()
        )
    }

    /// Deactivate the session. History and points persist in memory.
    pub fn end_session(&mut self) {
        self.is_active = false;
    }
}

impl Default for UserSession {
    fn default() -> Self {
        Self::new(format!("user-{}", Uuid::new_v4()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_active_and_empty() {
        let s = UserSession::new("tester");
        assert!(s.is_active());
        assert_eq!(s.total_commands(), 0);
        assert!(s.command_history().is_empty());
        assert!(s.current_quest_id().is_none());
        assert_eq!(s.total_points(), 0.0);
    }

    #[test]
    fn add_command_tracks_history_and_count() {
        let mut s = UserSession::new("tester");
        s.add_command("1");
        s.add_command("4");
        assert_eq!(s.command_history(), ["1", "4"]);
        assert_eq!(s.total_commands(), 2);
        assert!(s.last_activity() >= s.start_time());
    }

    #[test]
    fn mark_quest_completed_is_idempotent() {
        let mut s = UserSession::new("tester");
        s.mark_quest_completed("git-basics");
        s.mark_quest_completed("git-basics");
        assert_eq!(s.completed_quests().len(), 1);
        assert!(s.has_completed("git-basics"));
    }

    #[test]
    fn mark_quest_completed_ignores_blank_ids() {
        let mut s = UserSession::new("tester");
        s.mark_quest_completed("  ");
        s.mark_quest_completed("");
        assert!(s.completed_quests().is_empty());
    }

    #[test]
    fn completed_quests_keep_first_completion_order() {
        let mut s = UserSession::new("tester");
        s.mark_quest_completed("git-remote");
        s.mark_quest_completed("git-basics");
        s.mark_quest_completed("git-remote");
        assert_eq!(s.completed_quests(), ["git-remote", "git-basics"]);
    }

    #[test]
    fn points_summary_formats_fractional_points() {
        let mut s = UserSession::new("tester");
        s.add_points(7.5);
        s.mark_quest_completed("git-basics");
        assert_eq!(s.points_summary(), "Total Points: 7.5 | Badges Earned: 1");
    }

    #[test]
    fn points_summary_formats_whole_points_without_decimal() {
        let mut s = UserSession::new("tester");
        s.add_points(10.0);
        assert_eq!(s.points_summary(), "Total Points: 10 | Badges Earned: 0");
    }

    #[test]
    fn end_session_keeps_history_and_points() {
        let mut s = UserSession::new("tester");
        s.add_command("1");
        s.add_points(5.0);
        s.end_session();
        assert!(!s.is_active());
        assert_eq!(s.total_commands(), 1);
        assert_eq!(s.total_points(), 5.0);
    }

    #[test]
    fn default_session_generates_a_user_id() {
        let s = UserSession::default();
        assert!(s.user_id().starts_with("user-"));
    }
}
