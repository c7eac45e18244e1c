use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Short alphanumeric code identifying a station (e.g. `MX`, `CABY`)
///
/// Hashes and compares exactly like the underlying string, so maps keyed by
/// `StationCode` can be queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationCode(String);

impl StationCode {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StationCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StationCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for StationCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl PartialEq<str> for StationCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StationCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Station catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub short_name: StationCode,
    pub long_name: String,
}

impl Station {
    #[must_use]
    pub fn new(short_name: impl Into<StationCode>, long_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            long_name: long_name.into(),
        }
    }

    /// Case-insensitive substring match on either name
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.short_name.as_str().to_lowercase().contains(&term)
            || self.long_name.to_lowercase().contains(&term)
    }
}
