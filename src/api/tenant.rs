// src/api/tenant.rs

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Tenant;

/// Onboarding/settings form. `business_type` is one of
/// [`crate::models::BUSINESS_TYPES`] values; the server validates it.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTenantInput {
    pub name: String,
    pub business_type: String,
}

impl ApiClient {
    /// Errors are propagated so onboarding can block until the profile
    /// actually saved.
    pub async fn update_tenant_profile(
        &self,
        input: &UpdateTenantInput,
    ) -> Result<Tenant, ApiError> {
        self.put_json("/api/v1/tenant/settings", input).await
    }
}
