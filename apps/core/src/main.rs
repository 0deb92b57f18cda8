// ShelfBot V1 Entry Point
// "The Brain" - rule-based intent matching over a fixed catalog

mod brain;
mod catalog;
mod error;

#[cfg(test)]
mod tests;

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use brain::Matcher;
use catalog::Catalog;

#[derive(Debug, Parser)]
#[command(name = "shelfbot", about = "Rule-based supermarket chatbot")]
struct Cli {
    /// Path to the intent catalog JSON file
    #[arg(short, long, default_value = "intents.json")]
    intents: PathBuf,

    /// Seed the response picker for reproducible replies
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let catalog = Catalog::from_path(&cli.intents).with_context(|| {
        format!(
            "failed to load intent catalog from {}",
            cli.intents.display()
        )
    })?;
    info!(intents = catalog.len(), "intent catalog loaded");

    let mut matcher = match cli.seed {
        Some(seed) => Matcher::seeded(catalog, seed),
        None => Matcher::new(catalog),
    };

    println!("Bot: Welcome to ALPHA supermarket !!!\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("You: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let user_input = line.trim();
        if user_input.is_empty() {
            continue;
        }
        if user_input.eq_ignore_ascii_case("exit") {
            break;
        }

        let response = matcher.get_response(user_input)?;
        println!("Bot: {}\n", response);
    }

    Ok(())
}
