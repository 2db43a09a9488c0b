//! Show command implementation.

use crate::cli::ShowArgs;
use crate::commands::listings::local_catalog;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rentright_domain::traits::ListingSource;
use rentright_domain::{FairnessClassifier, ListingView};
use rentright_sdk::{RentRightClient, SdkError};

/// Execute the show command.
pub async fn execute_show(
    args: ShowArgs,
    client: &RentRightClient,
    classifier: &FairnessClassifier,
    formatter: &Formatter,
) -> Result<()> {
    let view = match args.seed {
        Some(path) => {
            let Ok(listing) = local_catalog(&path)?.get_listing(args.id);
            let listing = listing.ok_or(CliError::ListingNotFound(args.id))?;
            ListingView::new(listing, classifier)
        }
        None => match client.get_listing(args.id).await {
            Ok(view) => view,
            Err(SdkError::NotFound(_)) => return Err(CliError::ListingNotFound(args.id)),
            Err(e) => return Err(e.into()),
        },
    };

    println!("{}", formatter.listing(&view)?);
    Ok(())
}
