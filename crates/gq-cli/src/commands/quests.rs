use comfy_table::{ContentArrangement, Table};

use gq_trainer::QuestService;

pub fn run(difficulty: Option<u8>) -> Result<(), String> {
    let service = QuestService::new();

    let quests = match difficulty {
        Some(level) => service.by_difficulty(level),
        None => service.all_quests(),
    };

    if quests.is_empty() {
        println!("  No quests found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "Difficulty", "Completed"]);

    for quest in &quests {
        table.add_row(vec![
            quest.id.clone(),
            quest.name.clone(),
            quest.difficulty_stars().to_string(),
            quest.completion_flag().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} quests", quests.len());

    Ok(())
}
