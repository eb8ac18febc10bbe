//! Authenticated REST client for the GCWC backend.

use reqwest::{header, Client, Response, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use gcwc_session::Session;

use crate::error::ApiError;
use crate::types::{
    AdjustedClub, CalculationRequest, CalculationResponse, ClubRequest, GolfClub, LoginRequest,
    LoginResponse, RegisterRequest, UserProfile,
};

/// Body substring the backend uses to signal an empty bag on 404.
const NO_CLUBS_MARKER: &str = "No golf clubs";

/// REST client for the first-party backend.
///
/// All mutating operations are confirmation-first: callers update local
/// state only from the records this client returns.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    client: Arc<Client>,
}

impl ApiClient {
    /// Client against the given backend base URL with an explicit timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            client: Arc::new(client),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    fn authorized(
        &self,
        request: reqwest::RequestBuilder,
        session: &Session,
    ) -> reqwest::RequestBuilder {
        request.header(header::AUTHORIZATION, session.bearer())
    }

    /// Exchange credentials for a session token.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        tracing::debug!("Logging in as {}", username);

        let url = self.endpoint("login/")?;
        let response = self
            .client
            .post(url)
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!("Login rejected with status {}", response.status());
            return Err(ApiError::InvalidCredentials);
        }

        let body: LoginResponse = response.json().await?;
        tracing::info!("Logged in as {}", username);
        Ok(Session::new(body.access))
    }

    /// Create an account. Success routes the caller back to login.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        tracing::debug!("Registering user {}", username);

        let url = self.endpoint("users/")?;
        let response = self
            .client
            .post(url)
            .json(&RegisterRequest {
                username,
                email,
                password,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!("Registration failed with status {}", response.status());
            return Err(ApiError::Registration);
        }

        tracing::info!("Registered user {}", username);
        Ok(())
    }

    /// Fetch the profile with its embedded club bag.
    pub async fn get_profile(&self, session: &Session) -> Result<UserProfile, ApiError> {
        tracing::debug!("Fetching profile");

        let url = self.endpoint("profile/")?;
        let response = self
            .authorized(self.client.get(url), session)
            .send()
            .await?;
        let response = check_auth(response)?;
        let response = check_status(response).await?;

        let profile: UserProfile = response.json().await?;
        tracing::info!(
            "Fetched profile for {} ({} clubs)",
            profile.username,
            profile.golf_clubs.len()
        );
        Ok(profile)
    }

    /// Add a club; the created record (with its backend-assigned id) is
    /// returned for the caller to append.
    pub async fn add_club(
        &self,
        session: &Session,
        name: &str,
        distance: u32,
    ) -> Result<GolfClub, ApiError> {
        let url = self.endpoint("profile/")?;
        let response = self
            .authorized(self.client.post(url), session)
            .json(&ClubRequest {
                club_name: name,
                distance,
            })
            .send()
            .await?;
        let response = check_auth(response)?;
        let response = check_status(response).await?;

        let club: GolfClub = response.json().await?;
        tracing::info!("Added club {} ({} yards)", club.club_name, club.distance);
        Ok(club)
    }

    /// Replace a club's name and distance by identifier.
    pub async fn edit_club(
        &self,
        session: &Session,
        id: i64,
        name: &str,
        distance: u32,
    ) -> Result<GolfClub, ApiError> {
        let url = self.endpoint(&format!("profile/{}/", id))?;
        let response = self
            .authorized(self.client.put(url), session)
            .json(&ClubRequest {
                club_name: name,
                distance,
            })
            .send()
            .await?;
        let response = check_auth(response)?;
        let response = check_status(response).await?;

        let club: GolfClub = response.json().await?;
        tracing::info!("Updated club {}", club.id);
        Ok(club)
    }

    /// Remove a club by identifier.
    pub async fn remove_club(&self, session: &Session, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("profile/{}/", id))?;
        let response = self
            .authorized(self.client.delete(url), session)
            .send()
            .await?;
        let response = check_auth(response)?;
        check_status(response).await?;

        tracing::info!("Removed club {}", id);
        Ok(())
    }

    /// Submit a weather reading; returns adjusted distances per club.
    ///
    /// A 404 whose body names the empty bag maps to [`ApiError::NoClubs`]
    /// so callers can show "no clubs configured" instead of an error.
    pub async fn calculate(
        &self,
        session: &Session,
        request: &CalculationRequest,
    ) -> Result<Vec<AdjustedClub>, ApiError> {
        tracing::debug!("Requesting adjusted distances");

        let url = self.endpoint("GCWC/calculations/")?;
        let response = self
            .authorized(self.client.post(url), session)
            .json(request)
            .send()
            .await?;
        let response = check_auth(response)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            if body.contains(NO_CLUBS_MARKER) {
                tracing::info!("Backend reports an empty bag");
                return Err(ApiError::NoClubs);
            }
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: body,
            });
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: CalculationResponse = response.json().await?;
        tracing::info!(
            "Received adjusted distances for {} clubs",
            body.golf_clubs.len()
        );
        Ok(body.golf_clubs)
    }
}

/// 401/403 means the token is missing or rejected; callers route to login.
fn check_auth(response: Response) -> Result<Response, ApiError> {
    match response.status() {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
        _ => Ok(response),
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}
