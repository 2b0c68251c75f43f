// src/api/reports.rs

use chrono::NaiveDate;
use tracing::warn;

use crate::client::ApiClient;
use crate::models::SalesSummary;

impl ApiClient {
    pub async fn sales_summary(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Option<SalesSummary> {
        let path = format!(
            "/api/v1/reports/sales?start_date={}&end_date={}",
            start_date, end_date
        );
        match self.get_json(&path).await {
            Ok(summary) => Some(summary),
            Err(error) => {
                warn!("failed to load sales summary: {}", error);
                None
            }
        }
    }
}
