//! Integration tests for fetching the directory into listing and detail views
//!
//! A stub HTTP endpoint stands in for the directory. These cover the paths
//! where the two error kinds must not be confused:
//! 1. Non-success status → listing shows the load failure, detail shows the
//!    network error even for an id that exists
//! 2. Successful fetch without the id → detail shows not found

mod common;

use docfinder::api::DirectoryClient;
use docfinder::error::FetchError;
use docfinder::logic::errors::ErrorType;
use docfinder::logic::reducer::Action;
use docfinder::model::{detail, listing, DetailState, LoadStatus, Model};
use docfinder::services::{spawn_api_service, ApiRequest, ApiResponse};
use docfinder::{ConsultMode, SortKey};

fn visible_ids(model: &Model) -> Vec<String> {
    model
        .listing()
        .expect("listing view")
        .visible
        .iter()
        .map(|d| d.id.clone())
        .collect()
}

/// Test: a successful fetch loads the listing in data-source order
#[tokio::test]
async fn test_listing_loads_from_endpoint() {
    let url = common::serve("200 OK", common::DIRECTORY_JSON).await;
    let client = DirectoryClient::new(url);

    let mut model = Model::new("/", false);
    let view_id = model.begin_view();
    assert!(model.apply_fetch(view_id, client.fetch_doctors().await));

    let listing = model.listing().expect("listing view");
    assert_eq!(listing.status, LoadStatus::Loaded);
    assert_eq!(visible_ids(&model), vec!["1", "2", "3", "4", "5"]);
    assert_eq!(
        listing.specialties,
        vec!["Dentist", "Dermatologist", "General Physician", "Pediatrician"]
    );
}

/// Test: in-clinic filter returns exactly the in-clinic doctors in original order
#[tokio::test]
async fn test_in_clinic_filter_keeps_source_order() {
    let url = common::serve("200 OK", common::DIRECTORY_JSON).await;
    let client = DirectoryClient::new(url);

    let mut model = Model::new("/", false);
    let view_id = model.begin_view();
    model.apply_fetch(view_id, client.fetch_doctors().await);

    if let Some(listing) = model.listing_mut() {
        listing.apply(Action::ToggleConsultMode(ConsultMode::InClinic));
    }
    assert_eq!(visible_ids(&model), vec!["2", "5"]);
}

/// Test: filters from the startup location apply once the fetch lands
#[tokio::test]
async fn test_startup_location_filters_apply() {
    let url = common::serve("200 OK", common::DIRECTORY_JSON).await;
    let client = DirectoryClient::new(url);

    let mut model = Model::new("/?specialty=Dentist&sort=fees", false);
    let view_id = model.begin_view();
    model.apply_fetch(view_id, client.fetch_doctors().await);

    // Dentists by fee: 450, 500, 650
    assert_eq!(visible_ids(&model), vec!["4", "1", "3"]);

    if let Some(listing) = model.listing_mut() {
        listing.apply(Action::ToggleSort(SortKey::ExperienceDescending));
    }
    // 13, 9, 4 years
    assert_eq!(visible_ids(&model), vec!["1", "3", "4"]);
}

/// Test: HTTP 500 → listing shows the load failure message
#[tokio::test]
async fn test_server_error_fails_listing() {
    let url = common::serve("500 Internal Server Error", "oops").await;
    let client = DirectoryClient::new(url);

    let result = client.fetch_doctors().await;
    assert!(matches!(result, Err(FetchError::Status { status: 500, .. })));

    let mut model = Model::new("/", false);
    let view_id = model.begin_view();
    model.apply_fetch(view_id, result);

    let listing = model.listing().expect("listing view");
    assert!(matches!(
        listing.status,
        LoadStatus::Failed { error_type: ErrorType::ServerError, .. }
    ));
    assert_eq!(listing.message(), Some(listing::FETCH_ERROR_MESSAGE));
}

/// Test: HTTP 500 → detail for an id that exists still shows the network error
#[tokio::test]
async fn test_server_error_is_not_reported_as_not_found() {
    let url = common::serve("500 Internal Server Error", "oops").await;
    let client = DirectoryClient::new(url);

    let mut model = Model::new("/doctor/2", false);
    let view_id = model.begin_view();
    model.apply_fetch(view_id, client.fetch_doctors().await);

    let page = model.detail().expect("detail view");
    assert!(matches!(page.state, DetailState::NetworkError { .. }));
    assert_eq!(page.message(), Some(detail::FETCH_ERROR_MESSAGE));
}

/// Test: successful fetch without the id → detail shows not found
#[tokio::test]
async fn test_missing_id_is_not_found() {
    let url = common::serve("200 OK", common::DIRECTORY_JSON).await;
    let client = DirectoryClient::new(url);

    let mut model = Model::new("/doctor/99", false);
    let view_id = model.begin_view();
    model.apply_fetch(view_id, client.fetch_doctors().await);

    let page = model.detail().expect("detail view");
    assert_eq!(page.state, DetailState::NotFound);
    assert_eq!(page.message(), Some(detail::NOT_FOUND_MESSAGE));
}

/// Test: detail for a numeric id in the payload resolves by its text form
#[tokio::test]
async fn test_detail_resolves_numeric_id() {
    let url = common::serve("200 OK", common::DIRECTORY_JSON).await;
    let client = DirectoryClient::new(url);

    let mut model = Model::new("/doctor/3", false);
    let view_id = model.begin_view();
    model.apply_fetch(view_id, client.fetch_doctors().await);

    let doctor = model
        .detail()
        .and_then(|page| page.doctor())
        .expect("doctor 3 should load");
    assert_eq!(doctor.name, "Dr. Meera Iyer");
    assert_eq!(doctor.fees, "650");
    assert!(doctor.clinic.is_none());
}

/// Test: one broken record does not take the whole directory down
#[tokio::test]
async fn test_malformed_record_does_not_fail_detail() {
    let body = r#"[
        {"name": "Dr. No Id", "languages": ["English"]},
        {"id": "2", "name": "Dr. Ravi Kumar", "languages": ["Hindi", null]}
    ]"#;
    let url = common::serve("200 OK", body).await;
    let client = DirectoryClient::new(url);

    let mut model = Model::new("/doctor/2", false);
    let view_id = model.begin_view();
    model.apply_fetch(view_id, client.fetch_doctors().await);

    let doctor = model
        .detail()
        .and_then(|page| page.doctor())
        .expect("doctor 2 should load");
    assert_eq!(doctor.languages, vec!["Hindi"]);
}

/// Test: a body that is not a doctor array is a decode failure
#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let url = common::serve("200 OK", r#"{"doctors": []}"#).await;
    let client = DirectoryClient::new(url);

    let result = client.fetch_doctors().await;
    assert!(matches!(result, Err(FetchError::Decode(_))));
}

/// Test: nothing listening → transport failure, never "not found"
#[tokio::test]
async fn test_unreachable_endpoint_is_fetch_error() {
    let url = common::closed_endpoint().await;
    let client = DirectoryClient::new(url);

    let mut model = Model::new("/doctor/1", false);
    let view_id = model.begin_view();
    let result = client.fetch_doctors().await;
    assert!(matches!(result, Err(FetchError::Request { .. })));

    model.apply_fetch(view_id, result);
    assert!(matches!(
        model.detail().map(|page| &page.state),
        Some(DetailState::NetworkError { .. })
    ));
}

/// Test: the background service answers a fetch request tagged with its view id
#[tokio::test]
async fn test_service_round_trip() {
    let url = common::serve("200 OK", common::DIRECTORY_JSON).await;
    let (request_tx, mut response_rx) = spawn_api_service(DirectoryClient::new(url));

    request_tx
        .send(ApiRequest::FetchDirectory { view_id: 7 })
        .expect("service should accept requests");

    let response = tokio::time::timeout(std::time::Duration::from_secs(10), response_rx.recv())
        .await
        .expect("service should answer")
        .expect("response channel open");

    let ApiResponse::DirectoryResult { view_id, doctors } = response;
    assert_eq!(view_id, 7);
    assert_eq!(doctors.expect("fetch should succeed").len(), 5);
}
