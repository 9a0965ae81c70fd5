//! Channel name - globally unique slug identifying a channel
//!
//! Channel names use hyphens in place of whitespace and carry no other
//! symbols, matching what the creation form accepts.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum channel name length
pub const MIN_LEN: usize = 3;
/// Maximum channel name length
pub const MAX_LEN: usize = 30;

/// Validated channel name (lowercase alphanumerics and hyphens)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelName(String);

impl ChannelName {
    /// Parse and validate a channel name
    pub fn parse(s: &str) -> Result<Self, ChannelNameError> {
        if s.len() < MIN_LEN {
            return Err(ChannelNameError::TooShort);
        }
        if s.len() > MAX_LEN {
            return Err(ChannelNameError::TooLong);
        }
        if s.starts_with('-') || s.ends_with('-') {
            return Err(ChannelNameError::InvalidChar);
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ChannelNameError::InvalidChar);
        }
        Ok(Self(s.to_string()))
    }

    /// Get the name as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner String
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Error when parsing a channel name
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChannelNameError {
    #[error("channel name must be at least {MIN_LEN} characters")]
    TooShort,

    #[error("channel name must be at most {MAX_LEN} characters")]
    TooLong,

    #[error("channel name may only contain lowercase letters, digits, and interior hyphens")]
    InvalidChar,
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ChannelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for ChannelName {
    type Err = ChannelNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChannelName::parse(s)
    }
}

impl Serialize for ChannelName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ChannelName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ChannelName::parse(&s).map_err(serde::de::Error::custom)
    }
}
