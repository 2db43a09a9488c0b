//! Listings command implementation.

use crate::cli::ListingsArgs;
use crate::error::Result;
use crate::output::Formatter;
use rentright_domain::traits::ListingSource;
use rentright_domain::{FairnessClassifier, ListingView};
use rentright_sdk::RentRightClient;
use rentright_store::{seed, MemoryStore};
use std::path::Path;
use tracing::debug;

/// Execute the listings command.
pub async fn execute_listings(
    args: ListingsArgs,
    client: &RentRightClient,
    classifier: &FairnessClassifier,
    formatter: &Formatter,
) -> Result<()> {
    let views = match args.seed {
        Some(path) => load_local(&path, classifier)?,
        None => {
            debug!("Fetching listings from {}", client.base_url());
            client.list_listings().await?
        }
    };

    println!("{}", formatter.listings(&views)?);
    Ok(())
}

/// Load a seed file into the same catalog the API serves from.
pub fn local_catalog(path: &Path) -> Result<MemoryStore> {
    let report = seed::load_seed_file(path)?;
    Ok(MemoryStore::from_listings(report.listings))
}

/// Load a seed file and classify its listings locally.
pub fn load_local(path: &Path, classifier: &FairnessClassifier) -> Result<Vec<ListingView>> {
    let Ok(listings) = local_catalog(path)?.list_listings();
    Ok(listings
        .into_iter()
        .map(|listing| ListingView::new(listing, classifier))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use rentright_domain::FairnessCategory;
    use std::path::PathBuf;

    fn fixture_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/seed_listings.json")
    }

    #[test]
    fn test_load_local() {
        let views = load_local(&fixture_path(), &FairnessClassifier::default()).unwrap();
        assert_eq!(views.len(), 5);
        assert_eq!(
            views[2].fairness.as_ref().map(|v| v.category),
            Some(FairnessCategory::Fair)
        );
        assert!(views[4].fairness.is_none());
    }

    #[test]
    fn test_load_local_missing_file() {
        let result = load_local(Path::new("/nonexistent/seed.json"), &FairnessClassifier::default());
        assert!(matches!(result, Err(CliError::Store(_))));
    }
}
