//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use rentright_domain::{FairnessClassifier, FairnessVerdict};

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let verdict = classify_args(&args, config)?;
    println!("{}", formatter.verdict(&verdict)?);
    Ok(())
}

/// Classify with the threshold from `--threshold` or the configuration.
fn classify_args(args: &ClassifyArgs, config: &Config) -> Result<FairnessVerdict> {
    let threshold = args.threshold.unwrap_or(config.liberalization_threshold);
    let classifier = FairnessClassifier::new(threshold);
    Ok(classifier.classify(args.advertised_rent, args.max_legal_rent, args.wws_points)?)
}
