use std::path::Path;

pub fn run(query: &str, file: Option<&Path>) -> Result<(), String> {
    let service = super::glossary_service(file);

    let matches = service.search(query);
    if matches.is_empty() {
        println!("  No glossary entries match \"{query}\".");
        return Ok(());
    }

    for entry in &matches {
        println!("  {} - {}", entry.command, entry.definition);
    }
    println!();
    println!("  {} match(es)", matches.len());

    Ok(())
}
