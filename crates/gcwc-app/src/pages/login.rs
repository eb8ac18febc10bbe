//! Login page: credentials in, persisted session out.

use gcwc_api::ApiClient;
use gcwc_core::PageState;
use gcwc_session::{Session, SessionStore};

/// Login flow: uninitialized → loading → ready(session) | error.
pub struct LoginPage {
    api: ApiClient,
    store: SessionStore,
    state: PageState<Session>,
}

impl LoginPage {
    pub fn new(api: ApiClient, store: SessionStore) -> Self {
        Self {
            api,
            store,
            state: PageState::Uninitialized,
        }
    }

    pub fn state(&self) -> &PageState<Session> {
        &self.state
    }

    /// Submit credentials. On success the token is persisted as the
    /// session credential before the page reports ready.
    pub async fn submit(&mut self, username: &str, password: &str) {
        self.state = PageState::Loading;

        match self.api.login(username, password).await {
            Ok(session) => {
                if let Err(e) = self.store.save(&session) {
                    tracing::warn!("Session not persisted: {}", e);
                }
                self.state = PageState::Ready(session);
            }
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                self.state = PageState::Error(e.user_message());
            }
        }
    }
}
