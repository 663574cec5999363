//! Fetching the latest published version token
//!
//! - [`source`]: `VersionSource` trait for anything that can publish tokens
//! - [`http`]: HTTP implementation against the version endpoint
//! - [`error`]: fetch errors

pub mod error;
pub mod http;
pub mod source;

pub use error::FetchError;
pub use http::HttpVersionSource;
pub use source::VersionSource;

use serde::Serialize;
use tracing::debug;

use crate::decoder::VersionToken;

/// Result of [`get_latest_version`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LatestVersion {
    /// Token decoded into its fields
    Decoded(VersionToken),
    /// Token exactly as published
    Raw(String),
}

impl LatestVersion {
    /// The token string, decoded or not
    pub fn token(&self) -> &str {
        match self {
            LatestVersion::Decoded(token) => token.as_str(),
            LatestVersion::Raw(raw) => raw,
        }
    }
}

/// Fetch the latest version token for `system`.
///
/// When `decode` is true the token is decoded and a malformed token is reported
/// as [`FetchError::Decode`]; otherwise it is returned untouched.
pub async fn get_latest_version(
    source: &dyn VersionSource,
    system: char,
    decode: bool,
) -> Result<LatestVersion, FetchError> {
    let raw = source.fetch_version(system).await?;
    debug!(%system, token = %raw, "Fetched latest version token");

    if decode {
        Ok(LatestVersion::Decoded(VersionToken::parse(&raw)?))
    } else {
        Ok(LatestVersion::Raw(raw))
    }
}
