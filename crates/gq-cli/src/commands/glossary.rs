use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(command: Option<&str>, category: Option<&str>, file: Option<&Path>) -> Result<(), String> {
    let service = super::glossary_service(file);

    // Single-command lookup takes precedence over listing.
    if let Some(command) = command {
        let entry = service
            .entry(command)
            .ok_or_else(|| format!("no glossary entry for \"{command}\""))?;
        print!("{}", entry.format_for_display());
        println!("Category: {}", entry.category.dimmed());
        return Ok(());
    }

    let entries = match category {
        Some(category) => service.by_category(category),
        None => service.all_entries(),
    };

    if entries.is_empty() {
        println!("  No glossary entries found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Command", "Definition", "Category"]);

    for entry in &entries {
        table.add_row(vec![
            entry.command.clone(),
            entry.definition.clone(),
            entry.category.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} entries", entries.len());

    Ok(())
}
