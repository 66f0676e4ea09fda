use crate::config::CompareConfig;
use crate::domain::errors::NetworkError;
use crate::domain::logging::{LogComponent, LogLevel, get_logger};
use crate::domain::orders::{DailyRecord, DateRange, OrdersRepository};
use gloo_net::http::Request;

/// REST client for the `get-orders-by-day` endpoint
#[derive(Debug, Clone)]
pub struct OrdersRestClient {
    endpoint: String,
}

impl OrdersRestClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn from_config(config: &CompareConfig) -> Self {
        Self::new(config.orders_endpoint())
    }

    pub fn orders_url(&self, range: &DateRange) -> String {
        format!("{}?{}", self.endpoint, range.query_string())
    }
}

impl OrdersRepository for OrdersRestClient {
    async fn fetch_orders_by_day(&self, range: &DateRange) -> Result<Vec<DailyRecord>, NetworkError> {
        let url = self.orders_url(range);
        get_logger().debug(
            LogComponent::Infrastructure("OrdersAPI"),
            &format!("📈 Fetching orders from: {url}"),
        );

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| NetworkError::HttpRequestFailed(format!("{e:?}")))?;

        if !response.ok() {
            let error = NetworkError::HttpStatus {
                status: response.status(),
                status_text: response.status_text(),
            };
            get_logger().error(LogComponent::Infrastructure("OrdersAPI"), &format!("❌ {error} for {url}"));
            return Err(error);
        }

        let records: Vec<DailyRecord> = response
            .json()
            .await
            .map_err(|e| NetworkError::InvalidResponse(format!("{e:?}")))?;

        get_logger().log_with_metadata(
            LogLevel::Info,
            LogComponent::Infrastructure("OrdersAPI"),
            &format!("✅ Loaded {} daily records", records.len()),
            &range.to_string(),
        );

        Ok(records)
    }
}
