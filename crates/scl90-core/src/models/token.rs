use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A single-use admission ticket: exactly 32 lowercase hex characters.
///
/// The value carries no state. Whether it has been consumed is recorded
/// in the store, never in the token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccessToken(String);

impl AccessToken {
    pub const LEN: usize = 32;

    /// Length of the prefix used when a token appears in logs.
    const HINT_LEN: usize = 8;

    pub fn is_well_formed(candidate: &str) -> bool {
        candidate.len() == Self::LEN
            && candidate
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    pub fn parse(candidate: &str) -> Result<Self, CoreError> {
        if Self::is_well_formed(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(CoreError::InvalidToken(candidate.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short prefix that identifies the token in logs without revealing it.
    pub fn hint(&self) -> &str {
        &self.0[..Self::HINT_LEN]
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccessToken {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AccessToken {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_well_formed(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidToken(value))
        }
    }
}

impl From<AccessToken> for String {
    fn from(token: AccessToken) -> Self {
        token.0
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
