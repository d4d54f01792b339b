mod cmd;

use clap::{Parser, Subcommand};
use dirstat_core::{InspectConfig, Inspector};

#[derive(Parser)]
#[command(name = "dirstat", about = "Inspect directories, file sizes and file identity")]
struct Cli {
    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Print -1 for any failure instead of an error message
    #[arg(long, global = true)]
    legacy: bool,

    /// Describe symlinks themselves rather than their targets
    #[arg(long, global = true)]
    no_follow: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every operation against the platform's sample file and directory
    Demo(cmd::demo::DemoArgs),
    /// Count the subdirectories of a directory
    CountDirs(cmd::dirs::DirArgs),
    /// Sum the sizes of the regular files in a directory
    TotalSize(cmd::dirs::DirArgs),
    /// Per-kind breakdown of a directory's entries
    Summary(cmd::dirs::DirArgs),
    /// Size of a regular file
    Size(cmd::file::SizeArgs),
    /// Check whether two paths are the same file
    Same(cmd::file::SameArgs),
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
    let config = InspectConfig::builder()
        .follow_symlinks(!cli.no_follow)
        .build();
    let ctx = cmd::Context {
        inspector: Inspector::new(config),
        json: cli.json,
        legacy: cli.legacy,
    };

    match cli.command {
        Commands::Demo(args) => cmd::demo::run(args, &ctx),
        Commands::CountDirs(args) => cmd::dirs::count(args, &ctx),
        Commands::TotalSize(args) => cmd::dirs::total_size(args, &ctx),
        Commands::Summary(args) => cmd::dirs::summary(args, &ctx),
        Commands::Size(args) => cmd::file::size(args, &ctx),
        Commands::Same(args) => cmd::file::same(args, &ctx),
    }
}
