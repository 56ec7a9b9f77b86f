//! Header records of a GPS navigation message file.
//! Each record is one physical line, identified by its label (columns 61-80).
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    field::{Columns, DecodingError, FieldError},
    version::Version,
};

/// `RINEX VERSION / TYPE`: F9.2,11X,A1,19X,A1
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatDecl {
    /// Format revision
    pub version: Version,
    /// File type, `N` for navigation data
    pub file_type: Option<char>,
    /// Satellite system, only used by observation files
    pub system: Option<char>,
}

impl FormatDecl {
    /// Decodes the format declaration. Only revision 2 navigation
    /// files are accepted: other revisions are reported as out of range,
    /// other file types as unsupported.
    pub(crate) fn decode(cols: &Columns) -> Result<Self, DecodingError> {
        let text = cols.text(0, 9);
        let version = text.parse::<Version>().map_err(|source| DecodingError {
            field: "version",
            source,
        })?;
        if !version.is_supported() {
            return Err(DecodingError {
                field: "version",
                source: FieldError::Range(text.to_string()),
            });
        }
        let decl = Self {
            version,
            file_type: cols.char(20),
            system: cols.char(40),
        };
        if !decl.is_navigation() {
            return Err(DecodingError {
                field: "file_type",
                source: FieldError::Unsupported(cols.text(20, 1).to_string()),
            });
        }
        Ok(decl)
    }

    /// Returns true if this declares a navigation message file
    pub fn is_navigation(&self) -> bool {
        self.file_type == Some('N')
    }
}

/// `PGM / RUN BY / DATE`: A20,A20,A20
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreationInfo {
    /// Program that created this file
    pub program: String,
    /// Agency that created this file
    pub agency: String,
    /// Creation date, as written
    pub date: String,
}

impl CreationInfo {
    pub(crate) fn decode(cols: &Columns) -> Self {
        Self {
            program: cols.text(0, 20).to_string(),
            agency: cols.text(20, 20).to_string(),
            date: cols.text(40, 20).to_string(),
        }
    }
}

/// `COMMENT`: A60
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Comment {
    pub text: String,
}

impl Comment {
    pub(crate) fn decode(cols: &Columns) -> Self {
        Self {
            text: cols.text_right_trimmed(0, 60).to_string(),
        }
    }
}

/// `ION ALPHA`: ionospheric parameters A0-A3 of almanac, 2X,4D12.4
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IonAlpha {
    pub alpha: [f64; 4],
}

impl IonAlpha {
    pub(crate) fn decode(cols: &Columns) -> Result<Self, DecodingError> {
        Ok(Self {
            alpha: cols.f64x4(["alpha0", "alpha1", "alpha2", "alpha3"], 2, 12)?,
        })
    }
}

/// `ION BETA`: ionospheric parameters B0-B3 of almanac, 2X,4D12.4
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IonBeta {
    pub beta: [f64; 4],
}

impl IonBeta {
    pub(crate) fn decode(cols: &Columns) -> Result<Self, DecodingError> {
        Ok(Self {
            beta: cols.f64x4(["beta0", "beta1", "beta2", "beta3"], 2, 12)?,
        })
    }
}

/// `DELTA-UTC: A0,A1,T,W`: almanac parameters to compute UTC time,
/// 3X,2D19.12,2I9
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeltaUtc {
    /// Polynomial term a0 [s]
    pub a0: f64,
    /// Polynomial term a1 [s/s]
    pub a1: f64,
    /// Reference time for UTC data, GPS time of week [s]
    pub t: i32,
    /// Reference week number, continuous (not modulo 1024)
    pub week: i32,
}

impl DeltaUtc {
    pub(crate) fn decode(cols: &Columns) -> Result<Self, DecodingError> {
        Ok(Self {
            a0: cols.f64("a0", 3, 19)?,
            a1: cols.f64("a1", 22, 19)?,
            t: cols.i32("t", 41, 9)?,
            week: cols.i32("week", 50, 9)?,
        })
    }
}

/// `LEAP SECONDS`: delta time due to leap seconds, I6
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LeapSeconds {
    pub leap_seconds: i32,
}

impl LeapSeconds {
    pub(crate) fn decode(cols: &Columns) -> Result<Self, DecodingError> {
        Ok(Self {
            leap_seconds: cols.i32("leap_seconds", 0, 6)?,
        })
    }
}
