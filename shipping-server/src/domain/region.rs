//! Region/country code type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Longest code accepted by [`RegionCode::parse`].
const MAX_LEN: usize = 8;

/// Error returned when parsing an invalid region code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid region code: {reason}")]
pub struct InvalidRegionCode {
    reason: &'static str,
}

/// A well-formed region/country code such as `de` or `uk`.
///
/// Codes scope city records to a country. They are 1 to 8 ASCII
/// alphanumeric characters and are stored lowercase, so `"DE"` and `"de"`
/// name the same region.
///
/// # Examples
///
/// ```
/// use shipping_server::domain::RegionCode;
///
/// let de = RegionCode::parse("DE").unwrap();
/// assert_eq!(de.as_str(), "de");
///
/// assert!(RegionCode::parse("").is_err());
/// assert!(RegionCode::parse("d e").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionCode(String);

impl RegionCode {
    /// Parse a region code, normalising it to lowercase.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, InvalidRegionCode> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidRegionCode {
                reason: "must not be empty",
            });
        }

        if trimmed.len() > MAX_LEN {
            return Err(InvalidRegionCode {
                reason: "must be at most 8 characters",
            });
        }

        if !trimmed.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidRegionCode {
                reason: "must be ASCII letters or digits",
            });
        }

        Ok(RegionCode(trimmed.to_ascii_lowercase()))
    }

    /// Returns the normalised code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RegionCode {
    type Error = InvalidRegionCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RegionCode::parse(&value)
    }
}

impl From<RegionCode> for String {
    fn from(code: RegionCode) -> Self {
        code.0
    }
}

impl fmt::Debug for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionCode({})", self.0)
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
