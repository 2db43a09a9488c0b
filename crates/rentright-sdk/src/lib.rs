//! RentRight Rust SDK
//!
//! Async client for the RentRight listings API.
//!
//! # Example
//!
//! ```no_run
//! use rentright_sdk::RentRightClient;
//!
//! # async fn run() -> Result<(), rentright_sdk::SdkError> {
//! let client = RentRightClient::new("http://localhost:9000/api");
//!
//! for view in client.list_listings().await? {
//!     println!("{}: {:?}", view.listing.title, view.fairness.map(|v| v.category));
//! }
//!
//! let verdict = client.classify(1200.0, 1000.0, 120).await?;
//! println!("{}", verdict.explanation);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod error;

pub use client::{RentRightClient, API_URL_ENV, DEFAULT_API_URL};
pub use error::SdkError;
