mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::AddArgs;
use commands::{add, collect, list};

/// Datakeep: a small contact record collector
///
/// Collects contact entries (name, age, email, phone, notes) and persists
/// them to a single JSON file in the working directory.
#[derive(Parser, Debug)]
#[command(name = "datakeep")]
#[command(author, version, about = "Collects contact records into a JSON store", long_about = None)]
struct Cli {
    /// Storage file (a JSON array of records)
    #[arg(short, long, global = true, default_value = defaults::STORAGE_FILE)]
    storage: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactively collect records until the user stops.
    ///
    /// Prompts for each field, saves after every entry, and asks whether
    /// to continue.
    Collect,

    /// Add a single record from command-line flags.
    Add(AddArgs),

    /// Show all stored records.
    List,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("Using storage file {}", cli.storage.display());

    match cli.command {
        Commands::Collect => {
            collect::collect_records(&cli.storage)?;
        }
        Commands::Add(args) => {
            add::add_record(&cli.storage, &args)?;
        }
        Commands::List => {
            list::list_records(&cli.storage)?;
        }
    }

    Ok(())
}
