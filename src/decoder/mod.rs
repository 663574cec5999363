//! Version token decoding
//!
//! - [`token`]: fixed-width token layout and the `VersionToken` value type
//! - [`tables`]: subsystem and release type code tables
//! - [`error`]: decode errors

pub mod error;
pub mod tables;
pub mod token;

pub use error::DecodeError;
pub use tables::{
    RELEASE_TYPES, SYSTEMS, TOTAL_SYSTEM, UNKNOWN_RELEASE_TYPE, UNKNOWN_SYSTEM,
    release_type_label, system_name,
};
pub use token::{TOKEN_WIDTH, VersionToken};
