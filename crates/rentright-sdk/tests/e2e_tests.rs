//! End-to-End Tests for the RentRight SDK
//!
//! Each test serves the real API router on an ephemeral port with the
//! fixture catalog and talks to it through the client.

use rentright_api::handlers::{create_router, AppState};
use rentright_domain::{FairnessCategory, FairnessClassifier, WwsInput};
use rentright_sdk::{RentRightClient, SdkError};
use rentright_store::{seed, MemoryStore};
use std::path::PathBuf;
use tokio::net::TcpListener;

/// Start the API in the background and return a client pointed at it
async fn spawn_api() -> RentRightClient {
    let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/seed_listings.json");
    let report = seed::load_seed_file(fixture).unwrap();
    let state = AppState::new(
        MemoryStore::from_listings(report.listings),
        FairnessClassifier::default(),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });

    RentRightClient::new(&format!("http://{}/api", addr))
}

#[tokio::test]
async fn test_e2e_list_listings() {
    let client = spawn_api().await;

    let listings = client.list_listings().await.unwrap();
    assert_eq!(listings.len(), 5);
    assert_eq!(listings[0].listing.title, "Charming Canal View Apartment");
    assert_eq!(
        listings[3].fairness.as_ref().map(|v| v.category),
        Some(FairnessCategory::Overpriced)
    );
    assert!(listings[4].fairness.is_none());
}

#[tokio::test]
async fn test_e2e_get_listing() {
    let client = spawn_api().await;

    let view = client.get_listing(2).await.unwrap();
    assert_eq!(view.listing.id, 2);
    assert_eq!(view.listing.wws_points, Some(260));
    assert_eq!(
        view.fairness.map(|v| v.category),
        Some(FairnessCategory::LikelyLiberalized)
    );
}

#[tokio::test]
async fn test_e2e_unknown_listing_is_not_found() {
    let client = spawn_api().await;

    match client.get_listing(999).await.unwrap_err() {
        SdkError::NotFound(detail) => assert_eq!(detail, "Listing not found"),
        other => panic!("Unexpected error type: {:?}", other),
    }
}

#[tokio::test]
async fn test_e2e_classify() {
    let client = spawn_api().await;

    let verdict = client.classify(800.0, 1000.0, 120).await.unwrap();
    assert_eq!(verdict.category, FairnessCategory::Fair);
    assert_eq!(verdict.explanation, "This is €200.00 below the max legal rent. Good deal!");

    let verdict = client.classify(1500.0, 1200.0, 150).await.unwrap();
    assert_eq!(verdict.category, FairnessCategory::LikelyLiberalized);
}

#[tokio::test]
async fn test_e2e_classify_invalid_input() {
    let client = spawn_api().await;

    match client.classify(f64::NAN, 1000.0, 120).await.unwrap_err() {
        SdkError::ApiError { status, .. } => assert_eq!(status, 400),
        other => panic!("Unexpected error type: {:?}", other),
    }
}

#[tokio::test]
async fn test_e2e_assess() {
    let client = spawn_api().await;

    let assessment = client
        .assess(&WwsInput {
            size_m2: 75.0,
            rooms: 3,
            energy_label: Some("a".to_string()),
            woz_value: Some(300_000.0),
        })
        .await
        .unwrap();

    assert_eq!(assessment.points, 200);
    assert_eq!(assessment.max_rent, 1550.0);
}
