// src/api/transactions.rs

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Transaction;

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutItem {
    pub product_id: String,
    pub quantity: u32,
}

/// Cart submitted from the POS page. Pricing, stock mutation and payment
/// settlement (including QRIS confirmation) all happen server-side; the
/// method is an opaque string here.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutInput {
    pub items: Vec<CheckoutItem>,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<i64>,
}

impl ApiClient {
    pub async fn list_transactions(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Vec<Transaction> {
        let mut params = Vec::new();
        if let Some(start) = start_date {
            params.push(format!("start_date={}", start));
        }
        if let Some(end) = end_date {
            params.push(format!("end_date={}", end));
        }
        let path = if params.is_empty() {
            "/api/v1/transactions".to_string()
        } else {
            format!("/api/v1/transactions?{}", params.join("&"))
        };

        match self.get_json(&path).await {
            Ok(transactions) => transactions,
            Err(error) => {
                warn!("failed to load transactions: {}", error);
                Vec::new()
            }
        }
    }

    pub async fn checkout(&self, input: &CheckoutInput) -> Result<Transaction, ApiError> {
        self.post_json("/api/v1/transactions", input).await
    }

    /// Request a void. The server re-runs the role/time-window rule and
    /// its rejection message is propagated verbatim; [`crate::policy`]
    /// only decides whether to show the control in the first place.
    pub async fn void_transaction(
        &self,
        id: &str,
        reason: &str,
    ) -> Result<Transaction, ApiError> {
        self.post_json(
            &format!("/api/v1/transactions/{}/void", id),
            &json!({ "reason": reason }),
        )
        .await
    }
}
