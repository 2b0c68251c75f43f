// src/api/subscription.rs

use tracing::warn;

use crate::client::ApiClient;
use crate::models::Subscription;

impl ApiClient {
    /// Current plan and quota limits, displayed only. Quota enforcement
    /// happens server-side when outlets or staff are created.
    pub async fn subscription_status(&self) -> Option<Subscription> {
        match self.get_json("/api/v1/subscription/status").await {
            Ok(subscription) => Some(subscription),
            Err(error) => {
                warn!("failed to load subscription status: {}", error);
                None
            }
        }
    }
}
