use chrono::Local;
use clap::Parser;
use deckgen::greeting::{format_date, greet_user, print_banner};

/// Greet a user and print today's date
#[derive(Debug, Parser)]
#[clap(name = "greet", version)]
struct Cli {
    /// Name to greet; missing or empty falls back to "Guest"
    name: Option<String>,
}

const DEFAULT_NAME: &str = "Guest";

fn main() {
    let cli = Cli::parse();

    print_banner("HELLO WORLD");
    let name = cli
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_NAME);
    println!("{}", greet_user(name));
    println!("Today is {}", format_date(Local::now().date_naive()));
}
