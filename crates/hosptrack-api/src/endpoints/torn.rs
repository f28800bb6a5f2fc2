// `torn` category: server-level selections.

use tracing::debug;

use crate::auth::ApiKey;
use crate::client::TornClient;
use crate::error::Error;
use crate::models::TimestampResponse;

impl TornClient {
    /// Fetch the current server timestamp.
    ///
    /// `GET /torn/?selections=timestamp`
    pub async fn fetch_timestamp(&self, key: &ApiKey) -> Result<i64, Error> {
        let url = self.api_url("torn", None, "timestamp", key)?;
        debug!("fetching server timestamp");
        let resp: TimestampResponse = self.get(url).await?;
        Ok(resp.timestamp)
    }

    /// Server timestamp, doubling as a key check.
    ///
    /// Returns the timestamp on success. On failure reports one diagnostic
    /// and returns a value `<= 0`: `-status` for HTTP failures, `-code` for
    /// API errors.
    pub async fn get_timestamp(&self, key: &ApiKey) -> i64 {
        match self.fetch_timestamp(key).await {
            Ok(timestamp) => timestamp,
            Err(err) => {
                self.report_failure("timestamp", &err);
                err.sentinel()
            }
        }
    }
}
