//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use rentright_domain::ListingId;
use std::path::PathBuf;

/// RentRight CLI - Check Dutch rental listings against the WWS points system.
#[derive(Debug, Parser)]
#[command(name = "rentright")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (default: ~/.rentright/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overriding the configured one
    #[arg(long, global = true, env = "RENTRIGHT_API_URL")]
    pub api_url: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify rent figures as fair, overpriced or likely liberalized
    Classify(ClassifyArgs),

    /// Score a unit with the WWS points system
    Assess(AssessArgs),

    /// List listings with their fairness verdicts
    Listings(ListingsArgs),

    /// Show one listing with its point breakdown
    Show(ShowArgs),

    /// Build a SQLite catalog from a seed file
    Seed(SeedArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Advertised monthly rent in euros
    #[arg(short, long)]
    pub advertised_rent: f64,

    /// Maximum legal monthly rent in euros
    #[arg(short, long)]
    pub max_legal_rent: f64,

    /// WWS point score
    #[arg(short, long)]
    pub wws_points: u32,

    /// Liberalization threshold, overriding the configured one
    #[arg(short, long)]
    pub threshold: Option<u32>,
}

/// Arguments for the assess command.
#[derive(Debug, Parser)]
pub struct AssessArgs {
    /// Living area in square meters
    #[arg(short, long)]
    pub size: f64,

    /// Number of rooms
    #[arg(short, long)]
    pub rooms: u32,

    /// Energy label (A++, A+, A, B, C, D)
    #[arg(short, long)]
    pub energy_label: Option<String>,

    /// WOZ value in euros
    #[arg(short, long)]
    pub woz_value: Option<f64>,
}

/// Arguments for the listings command.
#[derive(Debug, Parser)]
pub struct ListingsArgs {
    /// Read listings from a local seed file instead of the API
    #[arg(short, long)]
    pub seed: Option<PathBuf>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Listing ID
    pub id: ListingId,

    /// Read listings from a local seed file instead of the API
    #[arg(short, long)]
    pub seed: Option<PathBuf>,
}

/// Arguments for the seed command.
#[derive(Debug, Parser)]
pub struct SeedArgs {
    /// JSON seed file
    #[arg(long)]
    pub file: PathBuf,

    /// SQLite database to (re)build
    #[arg(short, long)]
    pub database: PathBuf,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,

    /// Set the API base URL
    SetApiUrl {
        /// API base URL (e.g., http://localhost:9000/api)
        url: String,
    },

    /// Set the liberalization threshold
    SetThreshold {
        /// WWS points at or above which a unit counts as liberalized
        points: u32,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
