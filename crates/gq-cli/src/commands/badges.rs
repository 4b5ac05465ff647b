use comfy_table::{ContentArrangement, Table};

use gq_core::points::format_points;
use gq_trainer::BadgeService;

pub fn run() -> Result<(), String> {
    let service = BadgeService::new();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Badge", "Points", "Max", "Quest"]);

    for badge in service.all_badges() {
        table.add_row(vec![
            badge.name.clone(),
            format_points(badge.points_earned),
            format_points(badge.max_points),
            badge.quest_id.clone().unwrap_or_else(|| "—".to_string()),
        ]);
    }

    println!("{table}");

    Ok(())
}
