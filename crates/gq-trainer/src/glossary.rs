//! Glossary service: loads the command reference from a JSON resource,
//! falling back to a literal default set when the source is missing or
//! malformed. Load failures are recovered here and never propagated.

use std::path::Path;

use serde::Deserialize;

use gq_core::{CoreResult, GlossaryCollection, GlossaryEntry};

/// The glossary resource compiled into the binary.
const EMBEDDED_GLOSSARY: &str = include_str!("../assets/glossary.json");

/// On-disk shape of the glossary resource.
#[derive(Debug, Deserialize)]
struct GlossaryFile {
    #[serde(rename = "glossaryEntries")]
    glossary_entries: Vec<GlossaryEntry>,
}

/// Serves glossary lookups, category browsing, and keyword search.
#[derive(Debug, Clone)]
pub struct GlossaryService {
    entries: GlossaryCollection,
}

impl GlossaryService {
    /// Create a service from the embedded glossary resource.
    pub fn new() -> Self {
        let entries = parse_glossary(EMBEDDED_GLOSSARY).unwrap_or_else(default_entries);
        Self { entries }
    }

    /// Create a service from a JSON file on disk. A missing or malformed
    /// file falls back to the literal default entries.
    pub fn from_json_file(path: &Path) -> Self {
        let entries = std::fs::read_to_string(path)
            .ok()
            .and_then(|json| parse_glossary(&json))
            .unwrap_or_else(default_entries);
        Self { entries }
    }

    /// Create a service over an existing collection.
    pub fn with_collection(entries: GlossaryCollection) -> Self {
        Self { entries }
    }

    /// The underlying collection.
    pub fn collection(&self) -> &GlossaryCollection {
        &self.entries
    }

    /// Add an entry. Fails on a blank or duplicate command.
    pub fn add_entry(
        &mut self,
        command: impl Into<String>,
        definition: impl Into<String>,
        example: impl Into<String>,
        category: impl Into<String>,
    ) -> CoreResult<()> {
        self.entries
            .add(GlossaryEntry::new(command, definition, example, category))
    }

    /// Defensive copy of all entries in resource order.
    pub fn all_entries(&self) -> Vec<GlossaryEntry> {
        self.entries.all()
    }

    /// Look up an entry by command, case-insensitively.
    pub fn entry(&self, command: &str) -> Option<&GlossaryEntry> {
        self.entries.get(command)
    }

    /// Entries in the given category.
    pub fn by_category(&self, category: &str) -> Vec<GlossaryEntry> {
        self.entries.by_category(category)
    }

    /// Entries whose command or definition contains the keyword.
    pub fn search(&self, keyword: &str) -> Vec<GlossaryEntry> {
        self.entries.search(keyword)
    }

    /// Unique categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for entry in &self.entries {
            if !categories.contains(&entry.category) {
                categories.push(entry.category.clone());
            }
        }
        categories
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the glossary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for GlossaryService {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a glossary resource into a collection. Entries with blank or
/// duplicate commands are skipped rather than failing the whole load.
fn parse_glossary(json: &str) -> Option<GlossaryCollection> {
    let file: GlossaryFile = serde_json::from_str(json).ok()?;
    let mut entries = GlossaryCollection::new();
    for entry in file.glossary_entries {
        let _ = entries.add(entry);
    }
    Some(entries)
}

/// The literal fallback set used when no resource can be loaded.
fn default_entries() -> GlossaryCollection {
    let mut entries = GlossaryCollection::new();
    let defaults = [
        GlossaryEntry::new(
            "git init",
            "Initialize a new Git repository",
            "git init my-project",
            "Repository Setup",
        ),
        GlossaryEntry::new("git add", "Add files to staging area", "git add .", "Staging Changes"),
        GlossaryEntry::new(
            "git commit",
            "Create a new commit",
            "git commit -m \"message\"",
            "Committing Changes",
        ),
    ];
    for entry in defaults {
        let _ = entries.add(entry);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_resource_loads() {
        let service = GlossaryService::new();
        assert!(service.len() >= 3);
        assert!(service.entry("git init").is_some());
        assert!(service.entry("GIT COMMIT").is_some());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let service = GlossaryService::from_json_file(Path::new("/no/such/glossary.json"));
        assert_eq!(service.len(), 3);
        assert!(service.entry("git init").is_some());
        assert!(service.entry("git add").is_some());
        assert!(service.entry("git commit").is_some());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let service = GlossaryService::from_json_file(file.path());
        assert_eq!(service.len(), 3);
    }

    #[test]
    fn well_formed_file_loads_entries_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"glossaryEntries": [
                {"command": "git stash", "definition": "Shelve changes", "example": "git stash", "category": "Workflow"},
                {"command": "git tag", "definition": "Mark a release point", "example": "git tag v1.0", "category": "Workflow"}
            ]}"#,
        )
        .unwrap();

        let service = GlossaryService::from_json_file(file.path());
        let commands: Vec<String> = service.all_entries().into_iter().map(|e| e.command).collect();
        assert_eq!(commands, vec!["git stash", "git tag"]);
    }

    #[test]
    fn categories_are_unique_and_ordered() {
        let mut service = GlossaryService::with_collection(GlossaryCollection::new());
        service
            .add_entry("git push", "send commits", "", "Remote Operations")
            .unwrap();
        service
            .add_entry("git add", "stage files", "", "Staging Changes")
            .unwrap();
        service
            .add_entry("git pull", "fetch and merge", "", "Remote Operations")
            .unwrap();

        assert_eq!(
            service.categories(),
            vec!["Remote Operations", "Staging Changes"]
        );
    }

    #[test]
    fn search_and_category_delegate_to_collection() {
        let service = GlossaryService::new();
        assert!(!service.search("repository").is_empty());
        assert!(!service.by_category("Staging Changes").is_empty());
        assert!(service.search("no such keyword anywhere").is_empty());
    }
}
