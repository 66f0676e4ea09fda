use crate::domain::errors::NetworkError;
use crate::domain::orders::{DailyRecord, DateRange};

/// Source of daily order records for one month.
///
/// Futures are not `Send`: the browser implementation is driven by `spawn_local`.
#[allow(async_fn_in_trait)]
pub trait OrdersRepository {
    async fn fetch_orders_by_day(&self, range: &DateRange) -> Result<Vec<DailyRecord>, NetworkError>;
}
