// src/api/inventory.rs

use serde_json::json;
use tracing::warn;

use crate::client::ApiClient;
use crate::models::{InventoryItem, InventorySummary};

impl ApiClient {
    /// `filter` is "all", "low" or "out", matching the page tabs.
    pub async fn inventory(&self, filter: &str) -> Vec<InventoryItem> {
        let path = if filter == "all" {
            "/api/v1/inventory".to_string()
        } else {
            format!("/api/v1/inventory?status={}", filter)
        };
        match self.get_json(&path).await {
            Ok(items) => items,
            Err(error) => {
                warn!("failed to load inventory: {}", error);
                Vec::new()
            }
        }
    }

    pub async fn inventory_summary(&self) -> Option<InventorySummary> {
        match self.get_json("/api/v1/inventory/summary").await {
            Ok(summary) => Some(summary),
            Err(error) => {
                warn!("failed to load inventory summary: {}", error);
                None
            }
        }
    }

    pub async fn update_stock(&self, product_id: &str, adjustment: i64) -> bool {
        let body = json!({ "adjustment": adjustment });
        match self
            .put_json::<InventoryItem, _>(
                &format!("/api/v1/inventory/{}/stock", product_id),
                &body,
            )
            .await
        {
            Ok(_) => true,
            Err(error) => {
                warn!("failed to update stock for product {}: {}", product_id, error);
                false
            }
        }
    }
}
