use anyhow::Context;
use clap::{Parser, Subcommand};
use deckgen::deck::{Deck, DeckSerializer};
use deckgen::decks::{ai_demo, workflow};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// deckgen - write the built-in slide decks as .pptx files
#[derive(Debug, Parser)]
#[clap(name = "deckgen", version, about = "Write the built-in slide decks as .pptx files")]
struct Cli {
    #[clap(subcommand)]
    deck: DeckCommand,

    /// Output file
    #[clap(long, short, global = true, default_value = "presentation.pptx")]
    output: PathBuf,

    /// Print the slide specs as JSON instead of writing a file
    #[clap(long, global = true)]
    outline: bool,
}

#[derive(Debug, Subcommand)]
enum DeckCommand {
    /// "AI-Assisted Development with Claude" (17 slides, dark theme)
    Workflow,
    /// "AI Demo - Claude Code Integration" (41 slides, light theme)
    AiDemo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let deck: Deck = match cli.deck {
        DeckCommand::Workflow => workflow::deck(),
        DeckCommand::AiDemo => ai_demo::deck(),
    }
    .context("building deck")?;

    if cli.outline {
        println!("{}", serde_json::to_string_pretty(&deck.slides)?);
        return Ok(());
    }

    let pres = deck.render().context("rendering slides")?;
    match DeckSerializer::write_async(pres, cli.output.clone()).await {
        Ok(path) => {
            println!("Created {}", path.display());
            Ok(())
        },
        Err(err) => {
            tracing::error!(path = %cli.output.display(), error = %err, "failed to write presentation");
            Err(err).with_context(|| format!("writing {}", cli.output.display()))
        },
    }
}
