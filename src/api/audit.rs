// src/api/audit.rs

use chrono::NaiveDate;
use tracing::warn;

use crate::client::ApiClient;
use crate::models::{ActivityLog, TransactionAuditLog};

impl ApiClient {
    /// Void/checkout trail. The backend rejects this for cashiers; the
    /// pages additionally hide the screen below manager.
    pub async fn audit_logs(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Vec<TransactionAuditLog> {
        let mut params = Vec::new();
        if let Some(start) = start_date {
            params.push(format!("start_date={}", start));
        }
        if let Some(end) = end_date {
            params.push(format!("end_date={}", end));
        }
        let path = if params.is_empty() {
            "/api/v1/audit-logs".to_string()
        } else {
            format!("/api/v1/audit-logs?{}", params.join("&"))
        };

        match self.get_json(&path).await {
            Ok(logs) => logs,
            Err(error) => {
                warn!("failed to load audit logs: {}", error);
                Vec::new()
            }
        }
    }

    pub async fn activity_logs(&self) -> Vec<ActivityLog> {
        match self.get_json("/api/v1/activity-logs").await {
            Ok(logs) => logs,
            Err(error) => {
                warn!("failed to load activity logs: {}", error);
                Vec::new()
            }
        }
    }
}
