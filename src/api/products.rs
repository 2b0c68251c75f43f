// src/api/products.rs

use serde::Serialize;
use tracing::warn;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Product;

#[derive(Debug, Clone, Serialize)]
pub struct CreateProductInput {
    pub name: String,
    pub price: i64,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl ApiClient {
    pub async fn list_products(&self) -> Vec<Product> {
        match self.get_json("/api/v1/products").await {
            Ok(products) => products,
            Err(error) => {
                warn!("failed to load products: {}", error);
                Vec::new()
            }
        }
    }

    pub async fn create_product(&self, input: &CreateProductInput) -> Result<Product, ApiError> {
        self.post_json("/api/v1/products", input).await
    }

    pub async fn update_product(
        &self,
        id: &str,
        input: &CreateProductInput,
    ) -> Result<Product, ApiError> {
        self.put_json(&format!("/api/v1/products/{}", id), input).await
    }

    pub async fn delete_product(&self, id: &str) -> bool {
        match self.delete(&format!("/api/v1/products/{}", id)).await {
            Ok(()) => true,
            Err(error) => {
                warn!("failed to delete product {}: {}", id, error);
                false
            }
        }
    }
}
