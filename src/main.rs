use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod build;
mod commands;
mod config;
mod util;

use config::RuleSpec;

#[derive(Parser)]
struct Args {
    /// The command to execute
    #[command(subcommand)]
    command: SitemapCommand,
}

#[derive(Parser)]
struct InitArgs {
    /// The path to initialize the config file in
    path: PathBuf,

    /// Whether to create the directory if it doesn't exist
    #[arg(short, long, default_value = "false")]
    create: bool,
}

#[derive(Parser)]
struct GenerateArgs {
    /// The path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    /// The directory containing the published HTML pages
    #[arg(short, long)]
    publish_dir: Option<PathBuf>,

    /// The absolute base URL of the site (scheme and host)
    #[arg(short, long)]
    base_url: Option<String>,

    /// A prefix override in the form PREFIX[:PRIORITY[:CHANGEFREQ]]
    #[arg(short, long = "rule")]
    rules: Vec<RuleSpec>,

    /// Print the sitemap to stdout instead of writing sitemap.xml
    #[arg(long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum SitemapCommand {
    /// Write a starter sitemap.yaml
    Init(InitArgs),

    /// Generate sitemap.xml for a publish directory
    Generate(GenerateArgs),
}

fn main() -> Result<(), anyhow::Error> {
    // Logs go to stderr so `generate --dry-run` can print the sitemap on stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match args.command {
        SitemapCommand::Init(args) => {
            commands::init::run(&args)?;
        }
        SitemapCommand::Generate(args) => {
            commands::generate::run(&args)?;
        }
    }

    Ok(())
}
