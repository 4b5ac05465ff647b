//! CLI frontend for the GitQuest trainer.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gitquest",
    about = "GitQuest — learn Git through interactive quests",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the quest catalogue
    Quests {
        /// Filter by difficulty level (1, 3, or 5)
        #[arg(short, long)]
        difficulty: Option<u8>,
    },

    /// Show one quest and its learning modules
    Show {
        /// Quest ID (e.g. git-basics)
        id: String,
    },

    /// List badges and their points
    Badges,

    /// Browse the glossary or look up a single command
    Glossary {
        /// Command to look up (e.g. "git init"); omit to list everything
        command: Option<String>,

        /// Filter the listing by category
        #[arg(short, long)]
        category: Option<String>,

        /// Load entries from a JSON file instead of the built-in set
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Search glossary entries by keyword
    Search {
        /// Search keyword
        query: String,

        /// Load entries from a JSON file instead of the built-in set
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Start an interactive training session
    Play,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Quests { difficulty } => commands::quests::run(difficulty),
        Commands::Show { id } => commands::show::run(&id),
        Commands::Badges => commands::badges::run(),
        Commands::Glossary {
            command,
            category,
            file,
        } => commands::glossary::run(command.as_deref(), category.as_deref(), file.as_deref()),
        Commands::Search { query, file } => commands::search::run(&query, file.as_deref()),
        Commands::Play => commands::play::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
