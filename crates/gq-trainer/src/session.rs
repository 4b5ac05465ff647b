//! The interactive trainer session: a line-oriented menu over the quest,
//! badge, and glossary services plus per-run session bookkeeping.

use std::fmt::Write as _;

use gq_core::UserSession;

use crate::badges::BadgeManager;
use crate::error::TrainerError;
use crate::glossary::GlossaryService;

/// An interactive training session.
///
/// Owns the badge manager (and through it the quest and badge services), the
/// glossary, and the user's session record. Input is processed one line at a
/// time; every response is a string for the caller to render, and no input is
/// ever fatal.
pub struct TrainerSession {
    manager: BadgeManager,
    glossary: GlossaryService,
    session: UserSession,
}

impl TrainerSession {
    /// Create a session over freshly seeded services.
    pub fn new() -> Self {
        Self::with_parts(
            BadgeManager::default(),
            GlossaryService::new(),
            UserSession::default(),
        )
    }

    /// Create a session from explicit parts.
    pub fn with_parts(
        manager: BadgeManager,
        glossary: GlossaryService,
        session: UserSession,
    ) -> Self {
        Self {
            manager,
            glossary,
            session,
        }
    }

    /// The badge manager.
    pub fn manager(&self) -> &BadgeManager {
        &self.manager
    }

    /// The glossary service.
    pub fn glossary(&self) -> &GlossaryService {
        &self.glossary
    }

    /// The session record.
    pub fn session(&self) -> &UserSession {
        &self.session
    }

    /// Whether the session is still running.
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// The welcome banner shown once at startup.
    pub fn welcome(&self) -> String {
        format!(
            "=== GitQuest ===\nMaster Git through interactive learning quests.\n\n{}",
            self.session.points_summary()
        )
    }

    /// The main menu text.
    pub fn menu(&self) -> String {
        "\n--- Main Menu ---\n\
         1. Quests   - view quests, then 'start <id>'\n\
         2. Continue - resume your current quest ('complete' to finish)\n\
         3. Badges   - view your achievements\n\
         4. Glossary - browse commands ('lookup <cmd>', 'search <word>')\n\
         5. Quit     - exit\n"
            .to_string()
    }

    /// Process one line of input and return the response to render.
    pub fn process(&mut self, input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return "Please enter a choice (1-5).".to_string();
        }
        self.session.add_command(trimmed);

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "1" | "quests" => self.do_quest_list(),
            "start" => self.do_start(rest),
            "2" | "continue" => self.do_continue(),
            "complete" => self.do_complete(),
            "3" | "badges" => self.do_badges(),
            "4" | "glossary" => self.do_glossary(),
            "lookup" => self.do_lookup(rest),
            "search" => self.do_search(rest),
            "5" | "quit" | "q" => self.do_quit(),
            _ => format!("Invalid choice: '{trimmed}'. Enter 1-5."),
        }
    }

    fn do_quest_list(&self) -> String {
        let mut out = String::from("Available Quests:\n");
        for quest in self.manager.quests().collection() {
            let _ = writeln!(
                out,
                "  [{}] {} ({}) Completed: {}",
                quest.id,
                quest.name,
                quest.difficulty_stars(),
                quest.completion_flag(),
            );
        }
        out.push_str("Type 'start <id>' to begin a quest.");
        out
    }

    fn do_start(&mut self, id: &str) -> String {
        if id.is_empty() {
            return "Usage: start <quest-id>".to_string();
        }
        match self.manager.quests_mut().start_quest(id) {
            Ok(()) => {
                self.session.set_current_quest(Some(id.to_string()));
                let name = self
                    .manager
                    .quests()
                    .quest(id)
                    .map(|q| q.name.clone())
                    .unwrap_or_default();
                format!("Started quest: {name}. Type '2' to see its modules.")
            }
            Err(e) => format!("{e}"),
        }
    }

    fn do_continue(&self) -> String {
        let Some(quest) = self.manager.quests().current_quest() else {
            return "No active quest. Pick one from the quest list first.".to_string();
        };
        let mut out = format!("Current quest: {} ({})\n", quest.name, quest.difficulty_stars());
        for (i, module) in quest.modules.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, module);
        }
        let _ = write!(
            out,
            "Progress: {:.0}%. Type 'complete' when you have worked through the modules.",
            self.manager.quests().progress().min(100.0)
        );
        out
    }

    fn do_complete(&mut self) -> String {
        match self.manager.quests_mut().complete_current() {
            Ok(id) => {
                let awarded = self.manager.on_quest_completed(&id).unwrap_or(0.0);
                self.session.mark_quest_completed(&id);
                self.session.add_points(awarded);
                self.session.set_current_quest(None);
                format!(
                    "Quest '{id}' completed! Points awarded: {awarded}.\n{}",
                    self.session.points_summary()
                )
            }
            Err(TrainerError::NoActiveQuest) => {
                "No active quest to complete.".to_string()
            }
            Err(e) => format!("{e}"),
        }
    }

    fn do_badges(&self) -> String {
        let mut out = String::from("Your Badges:\n");
        for badge in self.manager.badges().all_badges() {
            let _ = writeln!(out, "  {}", badge.format_for_display());
        }
        out.push_str(&self.session.points_summary());
        out
    }

    fn do_glossary(&self) -> String {
        let mut out = String::from("Glossary Commands:\n");
        for category in self.glossary.categories() {
            let _ = writeln!(out, "{category}:");
            for entry in self.glossary.by_category(&category) {
                let _ = writeln!(out, "  {} - {}", entry.command, entry.definition);
            }
        }
        out.push_str("Type 'lookup <command>' for details or 'search <word>'.");
        out
    }

    fn do_lookup(&self, command: &str) -> String {
        if command.is_empty() {
            return "Usage: lookup <command>".to_string();
        }
        match self.glossary.entry(command) {
            Some(entry) => entry.format_for_display(),
            None => format!("No glossary entry for '{command}'."),
        }
    }

    fn do_search(&self, keyword: &str) -> String {
        if keyword.is_empty() {
            return "Usage: search <keyword>".to_string();
        }
        let matches = self.glossary.search(keyword);
        if matches.is_empty() {
            return format!("No glossary entries match '{keyword}'.");
        }
        let mut out = format!("{} match(es):\n", matches.len());
        for entry in matches {
            let _ = writeln!(out, "  {} - {}", entry.command, entry.definition);
        }
        out.trim_end().to_string()
    }

    fn do_quit(&mut self) -> String {
        self.session.end_session();
        "Thanks for using GitQuest. Keep practicing!".to_string()
    }
}

impl Default for TrainerSession {
    fn default() -> Self {
        Self::new()
    }
}
