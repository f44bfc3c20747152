mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "area-kit")]
#[command(version, about = "Static site generator for service-area location pages", long_about = None)]
struct Cli {
    /// Defaults to `build` into the current directory
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate location pages, the locations index, sitemap.xml and robots.txt
    Build {
        /// Output directory for generated site
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// site.toml to use instead of the built-in location list
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Check the location list (and optionally a built site) for problems
    Validate {
        /// site.toml to use instead of the built-in location list
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Previously generated output directory to check
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the built-in business profile and locations to site.toml
    Init {
        /// Directory to write site.toml into
        path: PathBuf,

        /// Overwrite an existing site.toml
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build {
        output: PathBuf::from("."),
        config: None,
    }) {
        Command::Build { output, config } => commands::build::run(output, config),
        Command::Validate { config, output } => commands::validate::run(config, output),
        Command::Init { path, force } => commands::init::run(path, force),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "area-kit", &mut io::stdout());
            Ok(())
        }
    }
}
