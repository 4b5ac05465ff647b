use colored::Colorize;

use gq_trainer::QuestService;

pub fn run(id: &str) -> Result<(), String> {
    let service = QuestService::new();

    let quest = service
        .quest(id)
        .ok_or_else(|| format!("quest not found: \"{id}\""))?;

    println!(
        "  {} [{}] {}",
        quest.name.bold(),
        quest.id.dimmed(),
        quest.difficulty_stars()
    );
    println!();

    if !quest.description.is_empty() {
        println!("  {}", quest.description);
        println!();
    }

    println!("  Modules:");
    for (i, module) in quest.modules.iter().enumerate() {
        println!("    {}. {}", i + 1, module);
    }
    println!();
    println!("  Completed: {}", quest.completion_flag());

    Ok(())
}
