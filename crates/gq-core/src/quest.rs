use serde::{Deserialize, Serialize};

use crate::collection::{IndexedCollection, Keyed};
use crate::error::CoreResult;

/// A themed unit of learning content: an ordered list of module descriptions
/// with a difficulty rating and a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Unique identifier, immutable once the quest is stored.
    pub id: String,
    /// Display name of the quest.
    pub name: String,
    /// Free-text description of the quest.
    pub description: String,
    /// Ordered learning-point strings making up the quest.
    pub modules: Vec<String>,
    /// Difficulty level: 1, 3, or 5. Any other value displays as level 1.
    pub difficulty: u8,
    /// Whether the quest has been completed.
    #[serde(default)]
    pub completed: bool,
}

impl Quest {
    /// Create a new, uncompleted quest.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        modules: Vec<String>,
        difficulty: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            modules,
            difficulty,
            completed: false,
        }
    }

    /// Difficulty rendered as asterisks: `*`, `***`, or `*****`.
    /// Invalid levels fall back to the easiest rendering.
    pub fn difficulty_stars(&self) -> &'static str {
        match self.difficulty {
            3 => "***",
            5 => "*****",
            _ => "*",
        }
    }

    /// Completion rendered as a single character: `Y` or `N`.
    pub fn completion_flag(&self) -> &'static str {
        if self.completed { "Y" } else { "N" }
    }

    /// Append a learning module. Blank strings are ignored.
    pub fn add_module(&mut self, module: impl Into<String>) {
        let module = module.into();
        if !module.trim().is_empty() {
            self.modules.push(module);
        }
    }

    /// Remove the first module matching `module`. Returns whether one was
    /// removed.
    pub fn remove_module(&mut self, module: &str) -> bool {
        match self.modules.iter().position(|m| m == module) {
            Some(pos) => {
                self.modules.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl Keyed for Quest {
    fn key(&self) -> Option<String> {
        if self.id.trim().is_empty() {
            None
        } else {
            Some(self.id.clone())
        }
    }
}

/// Ordered quest storage with O(1) lookup by quest ID.
#[derive(Debug, Clone, Default)]
pub struct QuestCollection {
    inner: IndexedCollection<Quest>,
}

impl QuestCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quest. Fails on a blank or duplicate ID.
    pub fn add(&mut self, quest: Quest) -> CoreResult<()> {
        self.inner.add(quest)
    }

    /// Remove a quest by ID and return it.
    pub fn remove(&mut self, id: &str) -> CoreResult<Quest> {
        self.inner.remove(id)
    }

    /// Replace the quest stored under `id`, keeping its display position.
    /// The replacement's own ID is forced to equal `id`.
    pub fn update(&mut self, id: &str, mut quest: Quest) -> CoreResult<()> {
        quest.id = id.to_string();
        self.inner.update(id, quest)
    }

    /// Look up a quest by ID.
    pub fn get(&self, id: &str) -> Option<&Quest> {
        self.inner.get(id)
    }

    /// Look up a quest by ID, mutably.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Quest> {
        self.inner.get_mut(id)
    }

    /// Defensive copy of all quests in insertion order.
    pub fn all(&self) -> Vec<Quest> {
        self.inner.all()
    }

    /// Quests with the given difficulty level, in insertion order.
    pub fn by_difficulty(&self, difficulty: u8) -> Vec<Quest> {
        self.inner.filter(|q| q.difficulty == difficulty)
    }

    /// Quests with the given completion status, in insertion order.
    pub fn by_completion(&self, completed: bool) -> Vec<Quest> {
        self.inner.filter(|q| q.completed == completed)
    }

    /// Number of stored quests.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over quests in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Quest> {
        self.inner.iter()
    }
}

impl<'a> IntoIterator for &'a QuestCollection {
    type Item = &'a Quest;
    type IntoIter = std::slice::Iter<'a, Quest>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
