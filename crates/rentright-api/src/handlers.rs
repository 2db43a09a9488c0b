//! HTTP request handlers for the listings API.
//!
//! Every listing leaves the server with its fairness verdict attached, so
//! clients never re-implement the classification rule.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use rentright_domain::traits::ListingSource;
use rentright_domain::{
    DomainError, FairnessClassifier, FairnessVerdict, Listing, ListingId, ListingView,
    WwsAssessment, WwsCalculator, WwsInput,
};
use rentright_store::MemoryStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Listing catalog, read-only after startup
    pub catalog: Arc<MemoryStore>,
    /// Fairness classifier with the configured threshold
    pub classifier: FairnessClassifier,
    /// WWS calculator for ad-hoc assessments
    pub calculator: Arc<WwsCalculator>,
}

impl AppState {
    /// Create state with the default calculator
    pub fn new(catalog: MemoryStore, classifier: FairnessClassifier) -> Self {
        Self {
            catalog: Arc::new(catalog),
            classifier,
            calculator: Arc::new(WwsCalculator::default()),
        }
    }
}

/// Root message response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Number of listings in the catalog
    pub listing_count: usize,
}

/// Query parameters for ad-hoc classification
#[derive(Debug, Deserialize)]
pub struct ClassifyParams {
    /// Asking rent
    #[serde(rename = "advertisedRent")]
    pub advertised_rent: f64,
    /// Legal ceiling rent
    #[serde(rename = "maxLegalRent")]
    pub max_legal_rent: f64,
    /// WWS point score
    #[serde(rename = "wwsPoints")]
    pub wws_points: u32,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub detail: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// No listing with the requested id
    ListingNotFound,
    /// The listing exists but cannot be classified
    Unclassifiable(DomainError),
    /// Caller supplied invalid figures
    InvalidInput(DomainError),
    /// Path, query or body could not be parsed
    BadRequest(String),
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::ListingNotFound => (StatusCode::NOT_FOUND, "Listing not found".to_string()),
            AppError::Unclassifiable(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            AppError::InvalidInput(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

fn find_listing(state: &AppState, id: ListingId) -> Result<Listing, AppError> {
    // MemoryStore lookups are infallible
    let Ok(listing) = state.catalog.get_listing(id);
    listing.ok_or(AppError::ListingNotFound)
}

/// GET /api/ - Welcome message
async fn api_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the RentRightNL API.".to_string(),
    })
}

/// GET /api/listings - All listings with verdicts
async fn list_listings(State(state): State<AppState>) -> Json<Vec<ListingView>> {
    let Ok(listings) = state.catalog.list_listings();
    let views: Vec<ListingView> = listings
        .into_iter()
        .map(|listing| ListingView::new(listing, &state.classifier))
        .collect();
    debug!("Serving {} listings", views.len());
    Json(views)
}

/// GET /api/listings/:id - One listing with its verdict
async fn get_listing(
    State(state): State<AppState>,
    id: Result<Path<ListingId>, PathRejection>,
) -> Result<Json<ListingView>, AppError> {
    let Path(id) = id?;
    let listing = find_listing(&state, id)?;
    Ok(Json(ListingView::new(listing, &state.classifier)))
}

/// GET /api/listings/:id/fairness - Verdict only
async fn listing_fairness(
    State(state): State<AppState>,
    id: Result<Path<ListingId>, PathRejection>,
) -> Result<Json<FairnessVerdict>, AppError> {
    let Path(id) = id?;
    let listing = find_listing(&state, id)?;
    let verdict = listing
        .fairness(&state.classifier)
        .map_err(AppError::Unclassifiable)?;
    Ok(Json(verdict))
}

/// GET /api/classify - Classify raw figures
async fn classify(
    State(state): State<AppState>,
    params: Result<Query<ClassifyParams>, QueryRejection>,
) -> Result<Json<FairnessVerdict>, AppError> {
    let Query(params) = params?;
    let verdict = state
        .classifier
        .classify(params.advertised_rent, params.max_legal_rent, params.wws_points)
        .map_err(AppError::InvalidInput)?;
    Ok(Json(verdict))
}

/// POST /api/wws/assess - Score raw property characteristics
async fn assess(
    State(state): State<AppState>,
    input: Result<Json<WwsInput>, JsonRejection>,
) -> Result<Json<WwsAssessment>, AppError> {
    let Json(input) = input?;
    let assessment = state.calculator.assess(&input).map_err(AppError::InvalidInput)?;
    Ok(Json(assessment))
}

/// GET /health - Health check
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        listing_count: state.catalog.len(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/api/", get(api_root))
        .route("/api/listings", get(list_listings))
        .route("/api/listings/:id", get(get_listing))
        .route("/api/listings/:id/fairness", get(listing_fairness))
        .route("/api/classify", get(classify))
        .route("/api/wws/assess", post(assess))
        .route("/health", get(health_check))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt; // for oneshot

    fn create_test_state() -> AppState {
        let listing = Listing {
            id: 1,
            title: "Cozy Studio near Station".to_string(),
            location: "Rotterdam Centraal".to_string(),
            images: vec![],
            advertised_rent: 1100.0,
            size_m2: 45.0,
            rooms: 1,
            description: String::new(),
            energy_label: None,
            woz_value: None,
            wws_points: Some(125),
            max_legal_rent: Some(850.20),
            amenities: vec![],
            wws_breakdown: vec![],
        };
        AppState::new(MemoryStore::from_listings(vec![listing]), FairnessClassifier::default())
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_listing() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/api/listings/1")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_listing() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/api/listings/999")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_id_renders_detail() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/api/listings/abc")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(!error.detail.is_empty());
    }

    #[test]
    fn test_listing_view_without_wws_data() {
        let mut listing = find_listing(&create_test_state(), 1).unwrap();
        listing.wws_points = None;

        let view = ListingView::new(listing, &FairnessClassifier::default());
        assert!(view.fairness.is_none());
    }
}
