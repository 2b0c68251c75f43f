// src/api/auth.rs

use tracing::{info, warn};

use crate::client::ApiClient;
use crate::models::Me;
use crate::session::TokenPair;

impl ApiClient {
    /// Current user and tenant, or `None` when the call fails for any
    /// reason. Route guards only need the yes/no.
    ///
    /// This endpoint answers the bare `{ user, tenant }` object, not the
    /// `{ data }` envelope the domain endpoints use.
    pub async fn current_user(&self) -> Option<Me> {
        match self.get_json_raw("/api/v1/auth/me").await {
            Ok(me) => Some(me),
            Err(error) => {
                warn!("failed to load current user: {}", error);
                None
            }
        }
    }

    /// Where to send the browser for Google sign-in. The backend redirects
    /// back with both tokens in the query string; hand those to
    /// [`ApiClient::store_oauth_tokens`].
    pub fn google_auth_url(&self) -> String {
        self.endpoint_url("/api/v1/auth/google")
            .map(String::from)
            .unwrap_or_else(|_| {
                format!(
                    "{}/api/v1/auth/google",
                    self.base_url().as_str().trim_end_matches('/')
                )
            })
    }

    /// OAuth callback hand-off: persist the pair issued by the backend.
    pub fn store_oauth_tokens(&self, access_token: String, refresh_token: String) {
        self.session().store(TokenPair {
            access_token,
            refresh_token,
        });
    }

    /// Presence check only; an expired-but-present token still counts
    /// until a request fails.
    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn logout(&self) {
        info!("logging out, clearing stored session");
        self.session().clear();
    }
}
