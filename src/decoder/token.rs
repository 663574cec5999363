//! Fixed-width version token
//!
//! Layout (7 characters):
//!
//! ```text
//!  0 1   2 3   4        5        6
//! [T T] [S S] [system] [release] [N]
//! ```
//!
//! - `TT`: top-level version, two decimal digits
//! - `SS`: sub-level version, two decimal digits
//! - `system`: subsystem code (see [`SYSTEMS`](super::tables::SYSTEMS))
//! - `release`: release type code (see [`RELEASE_TYPES`](super::tables::RELEASE_TYPES))
//! - `N`: release version, one decimal digit

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

use crate::decoder::error::DecodeError;
use crate::decoder::tables::{
    UNKNOWN_RELEASE_TYPE, UNKNOWN_SYSTEM, release_type_label, system_name,
};

/// Number of characters in a version token
pub const TOKEN_WIDTH: usize = 7;

/// A decoded version token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionToken {
    raw: String,
    top_level_version: u8,
    sub_level_version: u8,
    system_code: char,
    release_type_code: char,
    release_version: u8,
}

impl VersionToken {
    /// Decode a version token.
    ///
    /// Surrounding whitespace is ignored. The token must be exactly
    /// [`TOKEN_WIDTH`] characters and its numeric fields must be ASCII digits.
    /// Subsystem and release type codes are not checked against the tables;
    /// unknown codes decode fine and fall back to the "Unknown" labels.
    pub fn parse(input: &str) -> Result<Self, DecodeError> {
        let raw = input.trim();
        let chars: Vec<char> = raw.chars().collect();

        if chars.len() != TOKEN_WIDTH {
            return Err(DecodeError::InvalidLength {
                expected: TOKEN_WIDTH,
                actual: chars.len(),
            });
        }

        let token = Self {
            raw: raw.to_string(),
            top_level_version: parse_digits("top-level version", &chars[0..2])?,
            sub_level_version: parse_digits("sub-level version", &chars[2..4])?,
            system_code: chars[4],
            release_type_code: chars[5],
            release_version: parse_digits("release version", &chars[6..7])?,
        };

        debug!(token = %token.raw, decoded = %token, "Decoded version token");
        Ok(token)
    }

    /// The token as it was decoded, without surrounding whitespace
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn top_level_version(&self) -> u8 {
        self.top_level_version
    }

    pub fn sub_level_version(&self) -> u8 {
        self.sub_level_version
    }

    pub fn release_version(&self) -> u8 {
        self.release_version
    }

    pub fn system_code(&self) -> char {
        self.system_code
    }

    pub fn release_type_code(&self) -> char {
        self.release_type_code
    }

    /// Subsystem name, or "Unknown System" if the code is not in the table
    pub fn system(&self) -> &'static str {
        system_name(self.system_code).unwrap_or(UNKNOWN_SYSTEM)
    }

    /// Release type label, or "Unknown Release Type" if the code is not in the table
    pub fn release_type(&self) -> &'static str {
        release_type_label(self.release_type_code).unwrap_or(UNKNOWN_RELEASE_TYPE)
    }

    /// One-line summary of every field
    pub fn to_human_readable(&self) -> String {
        self.to_string()
    }
}

fn parse_digits(field: &'static str, digits: &[char]) -> Result<u8, DecodeError> {
    digits
        .iter()
        .try_fold(0u8, |acc, c| c.to_digit(10).map(|d| acc * 10 + d as u8))
        .ok_or_else(|| DecodeError::NonNumeric {
            field,
            value: digits.iter().collect(),
        })
}

impl FromStr for VersionToken {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Version: {}.{}, System: {}, Release Type: {}, Release Version: {}",
            self.top_level_version,
            self.sub_level_version,
            self.system(),
            self.release_type(),
            self.release_version
        )
    }
}

impl Serialize for VersionToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("VersionToken", 8)?;
        state.serialize_field("token", &self.raw)?;
        state.serialize_field("topLevelVersion", &self.top_level_version)?;
        state.serialize_field("subLevelVersion", &self.sub_level_version)?;
        state.serialize_field("systemCode", &self.system_code)?;
        state.serialize_field("system", self.system())?;
        state.serialize_field("releaseTypeCode", &self.release_type_code)?;
        state.serialize_field("releaseType", self.release_type())?;
        state.serialize_field("releaseVersion", &self.release_version)?;
        state.end()
    }
}
