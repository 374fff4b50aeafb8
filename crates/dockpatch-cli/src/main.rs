mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dockpatch",
    about = "Point a Dockerfile's BACKEND_URL at the backend for the current CI branch"
)]
#[command(version)]
struct Cli {
    /// Defaults to `patch` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite `ENV BACKEND_URL` lines in the Dockerfile
    Patch(PatchArgs),
    /// Print the backend URL for a branch
    Resolve {
        /// Branch slug (default: $CI_COMMIT_REF_SLUG, then "dev")
        #[arg(long, short = 'b')]
        branch: Option<String>,
    },
    /// List known branches and their backends
    Targets,
}

#[derive(Args, Default)]
pub(crate) struct PatchArgs {
    /// Dockerfile to rewrite (default: from dockpatch.toml, then ./Dockerfile)
    #[arg(long, short = 'f')]
    pub dockerfile: Option<PathBuf>,
    /// Branch slug (default: $CI_COMMIT_REF_SLUG, then "dev")
    #[arg(long, short = 'b')]
    pub branch: Option<String>,
    /// Print the patched Dockerfile to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Patch(PatchArgs::default())) {
        Commands::Patch(args) => commands::patch(args)?,
        Commands::Resolve { branch } => commands::resolve(branch)?,
        Commands::Targets => commands::targets()?,
    }

    Ok(())
}
