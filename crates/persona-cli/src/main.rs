mod cmd;
mod input;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::catalog::CatalogSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "persona",
    about = "Personality onboarding driver — assessments, archetype blends, and voice profiles",
    version,
    propagate_version = true
)]
struct Cli {
    /// Profile root (default: auto-detect from .persona/ or .git/)
    #[arg(long, global = true, env = "PERSONA_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the static catalogs
    Catalog {
        #[command(subcommand)]
        subcommand: CatalogSubcommand,
    },

    /// Check a responses file: progress, group completion, pending clarifications
    Check {
        /// Responses file (YAML)
        #[arg(long)]
        input: PathBuf,
    },

    /// Run the full scoring chain over a responses file
    Score {
        /// User id the record is keyed by
        #[arg(long)]
        user: String,

        /// Responses file (YAML)
        #[arg(long)]
        input: PathBuf,

        /// Persist the finished record under the profile root
        #[arg(long)]
        save: bool,
    },

    /// Show a persisted profile
    Show {
        /// User id
        user: String,

        /// Print the rendered system-instruction text instead
        #[arg(long)]
        prompt: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Catalog { subcommand } => cmd::catalog::run(subcommand, cli.json),
        Commands::Check { input } => cmd::check::run(&input, cli.json),
        Commands::Score { user, input, save } => {
            cmd::score::run(&root, &user, &input, save, cli.json)
        }
        Commands::Show { user, prompt } => cmd::show::run(&root, &user, prompt, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
