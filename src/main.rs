use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use notedrop::commands::NotedropPlugin;
use notedrop::host::fs::{DirVault, JsonDataStore};
use notedrop::host::traits::{Editor, Notifier};
use notedrop::host::types::NoteRef;
use notedrop::NotedropResult;

#[derive(Parser)]
#[command(name = "notedrop", version, about = "Pin a destination note and append text to it")]
struct Cli {
    /// Vault root directory.
    #[arg(long, default_value = ".")]
    vault: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pin a note (vault-relative path) as the appending destination.
    Set { path: String },
    /// Append the given text to the destination note.
    Append { text: Vec<String> },
    /// Show the currently configured destination.
    Status,
}

/// Prints notices straight to stdout.
struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

/// Editor stand-in for the CLI: the command-line text plays the role of both
/// the selection and the current line.
struct ArgEditor {
    text: String,
}

impl Editor for ArgEditor {
    fn selection(&self) -> String {
        self.text.clone()
    }

    fn current_line(&self) -> String {
        self.text.clone()
    }
}

#[tokio::main]
async fn main() -> NotedropResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let vault = Arc::new(DirVault::new(&cli.vault));
    let store = Arc::new(JsonDataStore::new(
        cli.vault.join(".notedrop").join("data.json"),
    ));
    let plugin = NotedropPlugin::load(vault, store, Arc::new(StdoutNotifier)).await;

    match cli.command {
        Command::Set { path } => {
            plugin.set_as_destination(&NoteRef::new(path)).await?;
        }
        Command::Append { text } => {
            let editor = ArgEditor {
                text: text.join(" "),
            };
            plugin.append_selection(&editor).await?;
        }
        Command::Status => match plugin.destination().await {
            Some(path) => println!("Appending destination: {path}"),
            None => println!("No appending destination set."),
        },
    }

    Ok(())
}
