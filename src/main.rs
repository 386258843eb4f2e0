mod app;
mod terminal;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use ts_scaffold::api::{AccountLookup, ApiClient, NameRegistry, Offline};
use ts_scaffold::install::NpmInstaller;
use ts_scaffold::prefs::PreferenceStore;
use ts_scaffold::{Collaborators, GeneratorConfig, git};

use crate::terminal::TerminalPrompter;

/// Scaffold a TypeScript module in the destination directory.
#[derive(Parser, Debug)]
#[command(name = "ts-scaffold", version, about)]
struct Cli {
    /// GitHub username or organization; skips the lookup and prompt
    #[arg(long, env = "TS_SCAFFOLD_GITHUB_ACCOUNT")]
    github_account: Option<String>,

    /// Directory to generate into
    #[arg(long, default_value = ".")]
    destination: PathBuf,

    /// Do not run npm install afterwards
    #[arg(long)]
    skip_install: bool,

    /// Skip GitHub and npm registry lookups
    #[arg(long)]
    offline: bool,

    /// Where remembered author answers are kept
    #[arg(long, env = "TS_SCAFFOLD_PREFERENCES")]
    preferences: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn initialize_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Stdout belongs to the prompt screens.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    std::fs::create_dir_all(&cli.destination)
        .with_context(|| format!("Failed to create {}", cli.destination.display()))?;
    let destination = cli
        .destination
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", cli.destination.display()))?;

    let mut config = GeneratorConfig::new(destination);
    config.git_user = git::user_identity(&config.destination).await;
    config.github_account = cli.github_account;
    config.skip_install = cli.skip_install;

    let mut prefs = PreferenceStore::open(cli.preferences);

    let client = ApiClient::new()?;
    let (lookup, registry): (&dyn AccountLookup, &dyn NameRegistry) = if cli.offline {
        (&Offline, &Offline)
    } else {
        (&client, &client)
    };
    let installer = NpmInstaller::new();
    let mut prompter = TerminalPrompter;

    let outcome = ts_scaffold::run(
        &config,
        Collaborators {
            prompter: &mut prompter,
            lookup,
            registry,
            installer: &installer,
            prefs: &mut prefs,
        },
    )
    .await;

    match outcome {
        Ok(summary) => {
            println!(
                "Wrote {} and {} config files in {}",
                summary.descriptor.display(),
                summary.templates.len(),
                config.destination.display()
            );
            if !summary.installed {
                println!("Run `npm install` to fetch dependencies.");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_cancelled() => {
            eprintln!("Aborted, nothing was written.");
            Ok(ExitCode::from(130))
        }
        Err(e) => Err(e.into()),
    }
}
