// src/api/customers.rs

use serde::Serialize;
use tracing::warn;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Customer;

#[derive(Debug, Clone, Serialize)]
pub struct CreateCustomerInput {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl ApiClient {
    pub async fn list_customers(&self) -> Vec<Customer> {
        match self.get_json("/api/v1/customers").await {
            Ok(customers) => customers,
            Err(error) => {
                warn!("failed to load customers: {}", error);
                Vec::new()
            }
        }
    }

    pub async fn create_customer(
        &self,
        input: &CreateCustomerInput,
    ) -> Result<Customer, ApiError> {
        self.post_json("/api/v1/customers", input).await
    }

    pub async fn delete_customer(&self, id: &str) -> bool {
        match self.delete(&format!("/api/v1/customers/{}", id)).await {
            Ok(()) => true,
            Err(error) => {
                warn!("failed to delete customer {}: {}", id, error);
                false
            }
        }
    }
}
