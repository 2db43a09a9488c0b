//! RentRight API server
//!
//! Serves the listing catalog and fairness verdicts over HTTP.

use rentright_api::{config::ApiConfig, start_server, ApiError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ApiError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        ApiConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using default development configuration");
        eprintln!("Usage: rentright-api --config <path-to-config.toml>");
        eprintln!();
        ApiConfig::default_dev_config()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("RentRight API - Rental listings with fairness verdicts");
    println!();
    println!("USAGE:");
    println!("    rentright-api --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("EXAMPLE:");
    println!("    rentright-api --config config/api.toml");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default: '127.0.0.1')");
    println!("    - bind_port: Port number (default: 9000)");
    println!("    - seed_path: JSON seed file with listings");
    println!("    - database_path: SQLite catalog built with 'rentright seed'");
    println!("    - liberalization_threshold: WWS points for the liberalized sector (default: 136)");
    println!("    - log_filter: tracing filter directive (default: 'info')");
    println!();
}
