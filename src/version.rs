//! RINEX format revision, as declared in the `RINEX VERSION / TYPE` record
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::field::FieldError;

/// Highest revision this reader is designed for
pub const SUPPORTED_VERSION: Version = Version { major: 2, minor: 11 };

/// RINEX format revision
#[derive(Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Version {
    /// Version major number
    pub major: u8,
    /// Version minor number
    pub minor: u8,
}

impl Version {
    /// Builds a new [Version]
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Returns true if this revision is supported.
    /// Only revision 2 files share the navigation layout read here.
    pub fn is_supported(&self) -> bool {
        self.major == SUPPORTED_VERSION.major && self.minor <= SUPPORTED_VERSION.minor
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl std::str::FromStr for Version {
    type Err = FieldError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FieldError::Blank);
        }
        let (major, minor) = s.split_once('.').unwrap_or((s, "0"));
        let parse = |digits: &str| -> Result<u8, FieldError> {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(FieldError::Syntax(s.to_string()));
            }
            digits
                .parse::<u8>()
                .map_err(|_| FieldError::Range(s.to_string()))
        };
        Ok(Self {
            major: parse(major)?,
            minor: parse(minor)?,
        })
    }
}
