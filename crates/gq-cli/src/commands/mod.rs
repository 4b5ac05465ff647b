pub mod badges;
pub mod glossary;
pub mod play;
pub mod quests;
pub mod search;
pub mod show;

use std::path::Path;

use gq_trainer::GlossaryService;

/// Build a glossary service from an optional external file, defaulting to
/// the embedded resource. Missing or malformed files fall back to the
/// literal default entries rather than failing.
fn glossary_service(file: Option<&Path>) -> GlossaryService {
    match file {
        Some(path) => GlossaryService::from_json_file(path),
        None => GlossaryService::new(),
    }
}
