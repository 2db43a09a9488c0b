//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command, saving changes to `path`.
pub fn execute_config(
    args: ConfigArgs,
    config: &mut Config,
    path: &Path,
    format: OutputFormat,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config, path, format),
        ConfigAction::SetApiUrl { url } => {
            config.set_api_url(url)?;
            config.save_to(path)?;
            println!(
                "{}",
                formatter.success(&format!("API URL set to {}", config.api_url))
            );
            Ok(())
        }
        ConfigAction::SetThreshold { points } => {
            config.set_threshold(points)?;
            config.save_to(path)?;
            println!(
                "{}",
                formatter.success(&format!("Liberalization threshold set to {} points", points))
            );
            Ok(())
        }
    }
}

fn show_config(config: &Config, path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Quiet => println!("{}", path.display()),
        OutputFormat::Table => {
            println!("# {}", path.display());
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}
