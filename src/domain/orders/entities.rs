use serde::{Deserialize, Serialize};

/// One day of aggregated sales, as returned by `get-orders-by-day`.
///
/// The API keys the day of month as `_id`; any other fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "_id")]
    pub day: u8,
    pub orders: u64,
    pub revenue: f64,
}
