// src/client.rs
// Authenticated request pipeline. Every domain endpoint goes through
// `request`, which attaches the bearer token read at send time and
// recovers from a single 401 by refreshing and retrying exactly once.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::{Client, Method, Response, StatusCode, header};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use url::Url;

use crate::config::{CONFIG, WarunginConfig};
use crate::error::ApiError;
use crate::models::{Envelope, ErrorBody};
use crate::session::{SessionStore, TokenPair};

type ExpiredHook = Box<dyn Fn() + Send + Sync>;

/// Per-call pipeline states. The transition table is what enforces the
/// "retry at most once" contract: `Retry` can only reach `Done`, never
/// `NeedsRefresh` again.
enum RequestState {
    Init,
    NeedsRefresh { stale: Option<String> },
    Retry,
    Expired,
    Done(Response),
}

pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: Arc<dyn SessionStore>,
    /// Serializes refresh attempts so a burst of concurrent 401s produces
    /// one refresh call instead of N.
    refresh_gate: Mutex<()>,
    on_session_expired: RwLock<Option<ExpiredHook>>,
}

impl ApiClient {
    pub fn new(config: &WarunginConfig, session: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.api_url)?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            http,
            base_url,
            session,
            refresh_gate: Mutex::new(()),
            on_session_expired: RwLock::new(None),
        })
    }

    pub fn from_env(session: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        Self::new(&CONFIG, session)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Called once per terminal refresh failure, after the session has
    /// been cleared. The embedding UI uses this to surface a "session
    /// expired" notice and route back to login; the default is a log line.
    pub fn set_session_expired_hook(&self, hook: impl Fn() + Send + Sync + 'static) {
        if let Ok(mut guard) = self.on_session_expired.write() {
            *guard = Some(Box::new(hook));
        }
    }

    /// Send an authenticated request to `path` on the configured origin.
    ///
    /// A 401 triggers one refresh-and-retry cycle; the retry's response is
    /// returned as-is even if it is itself a 401. Any other status passes
    /// straight through, this layer does not interpret business errors.
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let mut state = RequestState::Init;
        loop {
            state = match state {
                RequestState::Init => {
                    let token = self.session.access_token();
                    let response = self
                        .issue(method.clone(), path, body, token.as_deref())
                        .await?;
                    if response.status() == StatusCode::UNAUTHORIZED {
                        debug!("{} {} unauthorized, attempting refresh", method, path);
                        RequestState::NeedsRefresh { stale: token }
                    } else {
                        RequestState::Done(response)
                    }
                }
                RequestState::NeedsRefresh { stale } => {
                    if self.refresh_after_unauthorized(stale.as_deref()).await {
                        RequestState::Retry
                    } else {
                        RequestState::Expired
                    }
                }
                RequestState::Retry => {
                    let token = self.session.access_token();
                    let response = self
                        .issue(method.clone(), path, body, token.as_deref())
                        .await?;
                    // Terminal regardless of the retry's own status code.
                    RequestState::Done(response)
                }
                RequestState::Expired => {
                    warn!("token refresh failed, clearing session");
                    self.session.clear();
                    self.notify_session_expired();
                    return Err(ApiError::SessionExpired);
                }
                RequestState::Done(response) => return Ok(response),
            };
        }
    }

    /// Build the full endpoint URL by appending `path` to the configured
    /// base. Plain concatenation rather than `Url::join`: a base with a
    /// path prefix ("https://host/gateway") must keep that prefix, which
    /// joining an absolute path would discard.
    pub(crate) fn endpoint_url(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    async fn issue<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(path)?;
        let mut request = self
            .http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }

    /// Exchange the stored refresh token for a new pair.
    ///
    /// Returns false without touching the network when no refresh token is
    /// stored, and false on any transport error or non-ok status. A failed
    /// refresh never clears tokens here: a transient network blip must not
    /// destroy a still-valid pair. Eviction is the pipeline's decision.
    pub async fn refresh_tokens(&self) -> bool {
        let _guard = self.refresh_gate.lock().await;
        self.refresh_tokens_locked().await
    }

    /// Refresh path taken from inside the pipeline. `stale` is the access
    /// token that just 401'd; if the stored token already differs, another
    /// task rotated the pair while this one waited on the gate and no
    /// second refresh call is needed.
    async fn refresh_after_unauthorized(&self, stale: Option<&str>) -> bool {
        let _guard = self.refresh_gate.lock().await;
        if self.session.access_token().as_deref() != stale {
            debug!("tokens already rotated by a concurrent refresh");
            return true;
        }
        self.refresh_tokens_locked().await
    }

    async fn refresh_tokens_locked(&self) -> bool {
        let Some(refresh_token) = self.session.refresh_token() else {
            return false;
        };

        let url = match self.endpoint_url("/api/v1/auth/refresh") {
            Ok(url) => url,
            Err(error) => {
                warn!("invalid refresh URL: {}", error);
                return false;
            }
        };

        let response = self
            .http
            .post(url)
            .json(&json!({ "refresh_token": refresh_token }))
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(error) => {
                warn!("token refresh request failed: {}", error);
                return false;
            }
        };

        if !response.status().is_success() {
            warn!("token refresh rejected: {}", response.status());
            return false;
        }

        match response.json::<TokenPair>().await {
            Ok(pair) => {
                self.session.store(pair);
                true
            }
            Err(error) => {
                warn!("malformed refresh response: {}", error);
                false
            }
        }
    }

    fn notify_session_expired(&self) {
        if let Ok(guard) = self.on_session_expired.read() {
            match guard.as_ref() {
                Some(hook) => hook(),
                None => warn!("session expired, login required"),
            }
        }
    }

    // ── Typed helpers over the pipeline ──

    /// GET `path` and unwrap the `{ data }` envelope.
    pub async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.request(Method::GET, path, None::<&Value>).await?;
        Self::decode(response).await
    }

    /// GET `path` and decode the body as-is. `/auth/me` answers the bare
    /// `{ user, tenant }` object with no envelope around it.
    pub async fn get_json_raw<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.request(Method::GET, path, None::<&Value>).await?;
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|error| ApiError::Decode(error.to_string()))
        } else {
            Err(ApiError::Server {
                status,
                message: Self::error_message(response).await,
            })
        }
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::PUT, path, Some(body)).await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, path, None::<&Value>).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(ApiError::Server {
            status,
            message: Self::error_message(response).await,
        })
    }

    async fn decode<T>(response: Response) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            let envelope = response
                .json::<Envelope<T>>()
                .await
                .map_err(|error| ApiError::Decode(error.to_string()))?;
            Ok(envelope.data)
        } else {
            Err(ApiError::Server {
                status,
                message: Self::error_message(response).await,
            })
        }
    }

    async fn error_message(response: Response) -> String {
        response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| "request failed".to_string())
    }
}
