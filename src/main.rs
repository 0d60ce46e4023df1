use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod build;
mod commands;
mod config;
mod util;

#[derive(Parser)]
struct Args {
    /// The command to execute
    #[command(subcommand)]
    command: SiteCommand,
}

#[derive(Parser)]
struct BuildArgs {
    /// The path to the configuration file
    #[arg(short, long, default_value = "mordechai.yaml")]
    config_file: Option<PathBuf>,
}

#[derive(Parser)]
struct CleanArgs {
    /// The path to the configuration file
    #[arg(short, long, default_value = "mordechai.yaml")]
    config_file: Option<PathBuf>,

    /// Show what would be deleted without deleting anything
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum SiteCommand {
    /// Build the site
    Build(BuildArgs),

    /// Delete the generated site folder
    Clean(CleanArgs),
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    match args.command {
        SiteCommand::Build(args) => {
            commands::build::run(&args).await?;
        }
        SiteCommand::Clean(args) => {
            commands::clean::run(&args).await?;
        }
    }

    Ok(())
}
