//! Registration page. Ready means "route back to login".

use gcwc_api::ApiClient;
use gcwc_core::PageState;

pub struct RegisterPage {
    api: ApiClient,
    state: PageState<()>,
}

impl RegisterPage {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: PageState::Uninitialized,
        }
    }

    pub fn state(&self) -> &PageState<()> {
        &self.state
    }

    /// True once registration succeeded and the caller should show login.
    pub fn should_redirect_to_login(&self) -> bool {
        self.state.is_ready()
    }

    pub async fn submit(&mut self, username: &str, email: &str, password: &str) {
        self.state = PageState::Loading;

        match self.api.register(username, email, password).await {
            Ok(()) => self.state = PageState::Ready(()),
            Err(e) => {
                tracing::warn!("Registration failed: {}", e);
                self.state = PageState::Error(e.user_message());
            }
        }
    }
}
