//! Bookshelf CLI - replay catalog operations and inspect the results

mod commands;

use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Genre policy file (JSON with "allowed" and "age_restricted")
    #[arg(long, global = true)]
    genres: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the allowed genres
    Genres {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay an operation script and show the resulting catalog
    Apply {
        /// Script file path (JSON array of operations, "-" for stdin)
        script: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay an operation script and show one view of the catalog
    #[command(group(
        ArgGroup::new("view")
            .required(true)
            .args(["genre", "children", "favorites"])
    ))]
    List {
        /// Script file path (JSON array of operations, "-" for stdin)
        script: String,

        /// Books of this genre
        #[arg(long)]
        genre: Option<String>,

        /// Books suitable for children
        #[arg(long)]
        children: bool,

        /// Favorite books
        #[arg(long)]
        favorites: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookshelf_cli=debug,bookshelf_core=debug"
    } else {
        "bookshelf_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let policy = commands::load_policy(cli.genres.as_deref())?;

    match cli.command {
        Commands::Genres { json } => commands::genres(&policy, json),

        Commands::Apply { script, json } => commands::apply(&script, policy, json),

        Commands::List {
            script,
            genre,
            children,
            favorites: _,
            json,
        } => {
            // clap guarantees exactly one view flag
            let view = match (genre, children) {
                (Some(genre), _) => commands::View::Genre(genre),
                (None, true) => commands::View::Children,
                (None, false) => commands::View::Favorites,
            };
            commands::list(&script, policy, &view, json)
        }
    }
}
