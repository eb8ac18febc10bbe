//! Profile page: account details plus club bag CRUD.
//!
//! Mutations are confirmation-first: the local list changes only after
//! the backend acknowledges, and a failed mutation leaves the loaded
//! profile in place with its message in `action_error`.

use gcwc_api::{ApiClient, ApiError, UserProfile};
use gcwc_core::PageState;
use gcwc_session::Session;

pub struct ProfilePage {
    api: ApiClient,
    session: Session,
    state: PageState<UserProfile>,
    action_error: Option<String>,
    unauthorized: bool,
}

impl ProfilePage {
    pub fn new(api: ApiClient, session: Session) -> Self {
        Self {
            api,
            session,
            state: PageState::Uninitialized,
            action_error: None,
            unauthorized: false,
        }
    }

    pub fn state(&self) -> &PageState<UserProfile> {
        &self.state
    }

    /// Message from the last failed club mutation, if any.
    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    /// True when the load failed on a missing or rejected token and the
    /// caller should route back to the login page.
    pub fn needs_login(&self) -> bool {
        self.unauthorized
    }

    /// Fetch the profile with its embedded club bag.
    pub async fn load(&mut self) {
        self.state = PageState::Loading;
        self.unauthorized = false;
        self.action_error = None;

        match self.api.get_profile(&self.session).await {
            Ok(profile) => self.state = PageState::Ready(profile),
            Err(e) => {
                tracing::warn!("Profile load failed: {}", e);
                self.unauthorized = matches!(e, ApiError::Unauthorized);
                self.state = PageState::Error(e.user_message());
            }
        }
    }

    /// Add a club; the bag grows only once the backend confirms.
    pub async fn add_club(&mut self, name: &str, distance: u32) {
        self.action_error = None;

        if !self.state.is_ready() {
            self.action_error = Some("Profile is not loaded.".to_string());
            return;
        }

        match self.api.add_club(&self.session, name, distance).await {
            Ok(club) => {
                if let PageState::Ready(profile) = &mut self.state {
                    profile.golf_clubs.push(club);
                }
            }
            Err(e) => {
                tracing::warn!("Add club failed: {}", e);
                self.action_error = Some(e.user_message());
            }
        }
    }

    /// Edit a club by identifier; only the matching record is replaced.
    pub async fn edit_club(&mut self, id: i64, name: &str, distance: u32) {
        self.action_error = None;

        if !self.state.is_ready() {
            self.action_error = Some("Profile is not loaded.".to_string());
            return;
        }

        match self.api.edit_club(&self.session, id, name, distance).await {
            Ok(updated) => {
                if let PageState::Ready(profile) = &mut self.state {
                    if let Some(club) = profile.golf_clubs.iter_mut().find(|c| c.id == id) {
                        *club = updated;
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Edit club failed: {}", e);
                self.action_error = Some(e.user_message());
            }
        }
    }

    /// Remove a club by identifier once the backend confirms.
    pub async fn remove_club(&mut self, id: i64) {
        self.action_error = None;

        if !self.state.is_ready() {
            self.action_error = Some("Profile is not loaded.".to_string());
            return;
        }

        match self.api.remove_club(&self.session, id).await {
            Ok(()) => {
                if let PageState::Ready(profile) = &mut self.state {
                    profile.golf_clubs.retain(|c| c.id != id);
                }
            }
            Err(e) => {
                tracing::warn!("Remove club failed: {}", e);
                self.action_error = Some(e.user_message());
            }
        }
    }
}
