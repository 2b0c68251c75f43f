// src/api/outlets.rs

use serde::Serialize;
use tracing::warn;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Outlet, OutletStats};

#[derive(Debug, Clone, Serialize)]
pub struct CreateOutletInput {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl ApiClient {
    pub async fn list_outlets(&self) -> Vec<Outlet> {
        match self.get_json("/api/v1/outlets").await {
            Ok(outlets) => outlets,
            Err(error) => {
                warn!("failed to load outlets: {}", error);
                Vec::new()
            }
        }
    }

    pub async fn outlet_stats(&self, id: &str) -> Option<OutletStats> {
        match self.get_json(&format!("/api/v1/outlets/{}/stats", id)).await {
            Ok(stats) => Some(stats),
            Err(error) => {
                warn!("failed to load stats for outlet {}: {}", id, error);
                None
            }
        }
    }

    /// Creation errors (plan quota exceeded, duplicate name) are
    /// propagated so the form can display the server's message.
    pub async fn create_outlet(&self, input: &CreateOutletInput) -> Result<Outlet, ApiError> {
        self.post_json("/api/v1/outlets", input).await
    }

    pub async fn update_outlet(
        &self,
        id: &str,
        input: &CreateOutletInput,
    ) -> Result<Outlet, ApiError> {
        self.put_json(&format!("/api/v1/outlets/{}", id), input).await
    }

    pub async fn delete_outlet(&self, id: &str) -> bool {
        match self.delete(&format!("/api/v1/outlets/{}", id)).await {
            Ok(()) => true,
            Err(error) => {
                warn!("failed to delete outlet {}: {}", id, error);
                false
            }
        }
    }
}
