// src/api/staff.rs

use serde::Serialize;
use tracing::warn;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Role, Staff};

#[derive(Debug, Clone, Serialize)]
pub struct CreateStaffInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet_id: Option<String>,
}

/// Edit form never carries credentials, only assignment fields.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStaffInput {
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet_id: Option<String>,
}

impl ApiClient {
    pub async fn list_staff(&self) -> Vec<Staff> {
        match self.get_json("/api/v1/staff").await {
            Ok(staff) => staff,
            Err(error) => {
                warn!("failed to load staff: {}", error);
                Vec::new()
            }
        }
    }

    /// Creation errors (seat quota, duplicate email) are propagated so
    /// the form can display the server's message.
    pub async fn create_staff(&self, input: &CreateStaffInput) -> Result<Staff, ApiError> {
        self.post_json("/api/v1/staff", input).await
    }

    pub async fn update_staff(
        &self,
        id: &str,
        input: &UpdateStaffInput,
    ) -> Result<Staff, ApiError> {
        self.put_json(&format!("/api/v1/staff/{}", id), input).await
    }

    pub async fn delete_staff(&self, id: &str) -> bool {
        match self.delete(&format!("/api/v1/staff/{}", id)).await {
            Ok(()) => true,
            Err(error) => {
                warn!("failed to delete staff {}: {}", id, error);
                false
            }
        }
    }
}
