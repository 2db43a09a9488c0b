//! RentRight CLI - check rental listings against the WWS points system.

use clap::Parser;
use rentright_cli::commands;
use rentright_cli::{Cli, Command, Config, Formatter};
use rentright_domain::FairnessClassifier;
use rentright_sdk::RentRightClient;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> rentright_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Log to stderr so table and JSON output stay clean
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config, falling back to defaults
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path).unwrap_or_else(|e| {
        warn!("Ignoring unreadable config {}: {}", config_path.display(), e);
        Config::default()
    });
    if !config_path.exists() {
        if let Err(e) = config.save_to(&config_path) {
            warn!("Could not create config {}: {}", config_path.display(), e);
        }
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let api_url = cli.api_url.unwrap_or_else(|| config.api_url.clone());
    let client = RentRightClient::new(&api_url);
    let classifier = FairnessClassifier::new(config.liberalization_threshold);

    match cli.command {
        Command::Classify(args) => commands::execute_classify(args, &config, &formatter)?,
        Command::Assess(args) => commands::execute_assess(args, &formatter)?,
        Command::Listings(args) => {
            commands::execute_listings(args, &client, &classifier, &formatter).await?
        }
        Command::Show(args) => commands::execute_show(args, &client, &classifier, &formatter).await?,
        Command::Seed(args) => commands::execute_seed(args, &formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &mut config, &config_path, format, &formatter)?
        }
    }

    Ok(())
}
