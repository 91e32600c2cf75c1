use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod util;

#[derive(Parser)]
#[command(name = "formbind", about = "Form key utilities")]
struct Cli {
    /// Log decoding steps to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a key into its path segments
    Split(commands::split::Args),
    /// Join path segments into a key
    Join(commands::join::Args),
    /// Show how a query string groups into a value tree
    Tree(commands::tree::Args),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "formbind=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Split(args) => commands::split::run(args),
        Commands::Join(args) => commands::join::run(args),
        Commands::Tree(args) => commands::tree::run(args),
    }
}
