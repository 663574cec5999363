//! Source trait for fetching the current version token

#[cfg(test)]
use mockall::automock;

use crate::remote::error::FetchError;

/// Trait for fetching the latest version token of a subsystem
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Fetches the raw version token for a subsystem
    ///
    /// # Arguments
    /// * `system` - Subsystem selector code (e.g. `'T'` for the total system version)
    ///
    /// # Returns
    /// * `Ok(String)` - The token exactly as published
    /// * `Err(FetchError)` - If the request fails or the response is unusable
    async fn fetch_version(&self, system: char) -> Result<String, FetchError>;
}
