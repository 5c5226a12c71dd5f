use crate::errors::Result;
use crate::models::input::TickerSymbol;
use async_trait::async_trait;
use serde_json::Value;

/// Base trait for daily price sources
#[async_trait]
pub trait PriceSource {
    /// Name of the upstream provider, used in logs
    fn source_name(&self) -> &'static str;

    /// Fetch the raw daily time-series payload for a ticker.
    /// Error payloads are returned as-is; telling them apart is the transformer's job.
    async fn fetch_daily_series(&self, ticker: &TickerSymbol) -> Result<Value>;
}
