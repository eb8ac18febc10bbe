//! Integration tests for ApiClient using wiremock.

use std::time::Duration;

use gcwc_api::{ApiClient, ApiError, CalculationRequest, CompassDirection};
use gcwc_session::Session;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), Duration::from_secs(10)).expect("client should build")
}

fn session() -> Session {
    Session::new("abc123")
}

fn calculation_request() -> CalculationRequest {
    CalculationRequest {
        temperature: 70.0,
        wind_speed: "5 mph".to_string(),
        wind_direction: "NE".to_string(),
        humidity: "40".to_string(),
    }
}

fn profile_body() -> serde_json::Value {
    serde_json::json!({
        "username": "alice",
        "email": "alice@example.com",
        "golf_clubs": [
            { "id": 1, "club_name": "Driver", "distance": 250 }
        ]
    })
}

#[tokio::test]
async fn login_returns_a_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login/"))
        .and(body_json(serde_json::json!({
            "username": "alice",
            "password": "pw"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access": "abc123",
            "refresh": "def456"
        })))
        .mount(&server)
        .await;

    let session = client(&server).login("alice", "pw").await.unwrap();

    assert_eq!(session.token(), "abc123");
}

#[tokio::test]
async fn rejected_login_is_invalid_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "detail": "No active account found with the given credentials"
        })))
        .mount(&server)
        .await;

    let result = client(&server).login("alice", "wrong").await;

    assert!(matches!(result, Err(ApiError::InvalidCredentials)));
}

#[tokio::test]
async fn register_succeeds_on_created() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 7,
            "username": "bob",
            "email": "bob@example.com"
        })))
        .mount(&server)
        .await;

    let result = client(&server).register("bob", "bob@example.com", "pw").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn failed_register_is_a_generic_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "username": ["A user with that username already exists."]
        })))
        .mount(&server)
        .await;

    let result = client(&server).register("bob", "bob@example.com", "pw").await;

    assert!(matches!(result, Err(ApiError::Registration)));
}

#[tokio::test]
async fn profile_requires_the_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile/"))
        .and(header("Authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .mount(&server)
        .await;

    let profile = client(&server).get_profile(&session()).await.unwrap();

    assert_eq!(profile.username, "alice");
    assert_eq!(profile.golf_clubs.len(), 1);
    assert_eq!(profile.golf_clubs[0].club_name, "Driver");
    assert_eq!(profile.golf_clubs[0].distance, 250);
}

#[tokio::test]
async fn rejected_token_is_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "detail": "Given token not valid for any token type"
        })))
        .mount(&server)
        .await;

    let result = client(&server).get_profile(&session()).await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn add_club_returns_the_created_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/profile/"))
        .and(body_json(serde_json::json!({
            "club_name": "7i",
            "distance": 165
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 2,
            "club_name": "7i",
            "distance": 165
        })))
        .mount(&server)
        .await;

    let club = client(&server).add_club(&session(), "7i", 165).await.unwrap();

    assert_eq!(club.id, 2);
    assert_eq!(club.club_name, "7i");
}

#[tokio::test]
async fn edit_club_targets_the_record_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/profile/2/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 2,
            "club_name": "7i",
            "distance": 170
        })))
        .mount(&server)
        .await;

    let club = client(&server)
        .edit_club(&session(), 2, "7i", 170)
        .await
        .unwrap();

    assert_eq!(club.distance, 170);
}

#[tokio::test]
async fn remove_club_accepts_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/profile/2/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let result = client(&server).remove_club(&session(), 2).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn calculate_returns_adjusted_clubs() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/GCWC/calculations/"))
        .and(header("Authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "golf_clubs": [{
                "club_name": "Driver",
                "original_distance": 250.0,
                "adjusted_distance": { "N": 248.5, "NE": 255.0 }
            }]
        })))
        .mount(&server)
        .await;

    let clubs = client(&server)
        .calculate(&session(), &calculation_request())
        .await
        .unwrap();

    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0].distance_for(CompassDirection::NE), Some(255.0));
}

#[tokio::test]
async fn empty_bag_404_is_the_no_clubs_signal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/GCWC/calculations/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "detail": "No golf clubs found for this user."
        })))
        .mount(&server)
        .await;

    let result = client(&server)
        .calculate(&session(), &calculation_request())
        .await;

    assert!(matches!(result, Err(ApiError::NoClubs)));
}

#[tokio::test]
async fn plain_404_is_not_the_no_clubs_signal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/GCWC/calculations/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "detail": "Not found."
        })))
        .mount(&server)
        .await;

    let result = client(&server)
        .calculate(&session(), &calculation_request())
        .await;

    assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
}

#[tokio::test]
async fn calculate_surfaces_bad_request_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/GCWC/calculations/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "detail": "All weather inputs are required."
        })))
        .mount(&server)
        .await;

    let result = client(&server)
        .calculate(&session(), &calculation_request())
        .await;

    assert!(matches!(result, Err(ApiError::Status { status: 400, .. })));
}
