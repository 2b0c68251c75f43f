// src/api/materials.rs

use serde::Serialize;
use serde_json::json;
use tracing::warn;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{MaterialAlerts, RawMaterial};

#[derive(Debug, Clone, Serialize)]
pub struct CreateMaterialInput {
    pub name: String,
    pub unit: String,
    pub unit_price: i64,
    pub stock_qty: f64,
    pub min_stock_level: Option<f64>,
    pub supplier: Option<String>,
}

impl ApiClient {
    pub async fn list_materials(&self) -> Vec<RawMaterial> {
        match self.get_json("/api/v1/materials").await {
            Ok(materials) => materials,
            Err(error) => {
                warn!("failed to load materials: {}", error);
                Vec::new()
            }
        }
    }

    /// Low/out-of-stock buckets; empty buckets on failure.
    pub async fn material_alerts(&self) -> MaterialAlerts {
        match self.get_json("/api/v1/materials/alerts").await {
            Ok(alerts) => alerts,
            Err(error) => {
                warn!("failed to load material alerts: {}", error);
                MaterialAlerts::default()
            }
        }
    }

    pub async fn create_material(
        &self,
        input: &CreateMaterialInput,
    ) -> Result<RawMaterial, ApiError> {
        self.post_json("/api/v1/materials", input).await
    }

    pub async fn update_material(
        &self,
        id: &str,
        input: &CreateMaterialInput,
    ) -> Result<RawMaterial, ApiError> {
        self.put_json(&format!("/api/v1/materials/{}", id), input).await
    }

    /// Relative stock adjustment; positive restocks, negative writes off.
    pub async fn update_material_stock(&self, id: &str, adjustment: f64) -> bool {
        let body = json!({ "adjustment": adjustment });
        match self
            .put_json::<RawMaterial, _>(&format!("/api/v1/materials/{}/stock", id), &body)
            .await
        {
            Ok(_) => true,
            Err(error) => {
                warn!("failed to adjust stock for material {}: {}", id, error);
                false
            }
        }
    }

    pub async fn delete_material(&self, id: &str) -> bool {
        match self.delete(&format!("/api/v1/materials/{}", id)).await {
            Ok(()) => true,
            Err(error) => {
                warn!("failed to delete material {}: {}", id, error);
                false
            }
        }
    }
}
