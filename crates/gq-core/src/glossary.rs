use serde::{Deserialize, Serialize};

use crate::collection::{IndexedCollection, Keyed};
use crate::error::CoreResult;

/// A command-reference record: command, definition, example, category.
///
/// Identity is the command text alone, compared case-insensitively; the
/// definition, example, and category carry no identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlossaryEntry {
    /// The command this entry documents (unique, case-insensitive).
    pub command: String,
    /// What the command does.
    pub definition: String,
    /// A usage example, possibly empty.
    pub example: String,
    /// Grouping category for browsing.
    pub category: String,
}

impl GlossaryEntry {
    /// Create a new glossary entry.
    pub fn new(
        command: impl Into<String>,
        definition: impl Into<String>,
        example: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            definition: definition.into(),
            example: example.into(),
            category: category.into(),
        }
    }

    /// Multi-line display block. The example line is omitted when empty.
    pub fn format_for_display(&self) -> String {
        let mut out = format!("Command: {}\nDefinition: {}\n", self.command, self.definition);
        if !self.example.is_empty() {
            out.push_str(&format!("Example: {}\n", self.example));
        }
        out
    }
}

impl PartialEq for GlossaryEntry {
    fn eq(&self, other: &Self) -> bool {
        self.command.eq_ignore_ascii_case(&other.command)
    }
}

impl Eq for GlossaryEntry {}

impl Keyed for GlossaryEntry {
    fn key(&self) -> Option<String> {
        if self.command.trim().is_empty() {
            None
        } else {
            Some(self.command.to_lowercase())
        }
    }

    fn normalize_key(raw: &str) -> String {
        raw.to_lowercase()
    }
}

/// Ordered glossary storage with O(1) case-insensitive lookup by command.
#[derive(Debug, Clone, Default)]
pub struct GlossaryCollection {
    inner: IndexedCollection<GlossaryEntry>,
}

impl GlossaryCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Fails on a blank or duplicate command.
    pub fn add(&mut self, entry: GlossaryEntry) -> CoreResult<()> {
        self.inner.add(entry)
    }

    /// Remove an entry by command and return it.
    pub fn remove(&mut self, command: &str) -> CoreResult<GlossaryEntry> {
        self.inner.remove(command)
    }

    /// Replace the entry stored under `command`, keeping its display
    /// position. The replacement's command text must match the key
    /// (case-insensitively).
    pub fn update(&mut self, command: &str, entry: GlossaryEntry) -> CoreResult<()> {
        self.inner.update(command, entry)
    }

    /// Look up an entry by command, case-insensitively.
    pub fn get(&self, command: &str) -> Option<&GlossaryEntry> {
        self.inner.get(command)
    }

    /// Defensive copy of all entries in insertion order.
    pub fn all(&self) -> Vec<GlossaryEntry> {
        self.inner.all()
    }

    /// Entries in the given category, in insertion order.
    pub fn by_category(&self, category: &str) -> Vec<GlossaryEntry> {
        self.inner.filter(|e| e.category == category)
    }

    /// Entries whose command or definition contains the keyword,
    /// case-insensitively, in insertion order.
    pub fn search(&self, keyword: &str) -> Vec<GlossaryEntry> {
        let keyword = keyword.to_lowercase();
        self.inner.filter(|e| {
            e.command.to_lowercase().contains(&keyword)
                || e.definition.to_lowercase().contains(&keyword)
        })
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, GlossaryEntry> {
        self.inner.iter()
    }
}

impl<'a> IntoIterator for &'a GlossaryCollection {
    type Item = &'a GlossaryEntry;
    type IntoIter = std::slice::Iter<'a, GlossaryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
