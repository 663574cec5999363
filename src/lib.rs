//! Decoder for Gridlock fixed-width version tokens
//!
//! A version token such as `0105HR3` packs a top-level version, a sub-level
//! version, a subsystem code, a release type code and a release version into
//! seven characters.
//!
//! # Modules
//!
//! - [`decoder`]: token layout, validation and code tables
//! - [`remote`]: fetching the latest published token for a subsystem
//! - [`config`]: client configuration and data directory paths

pub mod config;
pub mod decoder;
pub mod remote;

pub use decoder::{DecodeError, VersionToken};
pub use remote::{FetchError, LatestVersion, get_latest_version};
