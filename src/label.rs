//! Header record labels (columns 61-80)
use std::str::FromStr;

use crate::field::substr_trimmed;

/// Offset of the record label within a header line
pub const LABEL_OFFSET: usize = 60;

/// Width of the record label
pub const LABEL_WIDTH: usize = 20;

/// Header record labels of a GPS navigation message file.
/// [RecordLabel::Unrecognized] is anything else: in the header section,
/// it marks the first data line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
pub enum RecordLabel {
    #[strum(serialize = "RINEX VERSION / TYPE")]
    FormatDecl,
    #[strum(serialize = "PGM / RUN BY / DATE")]
    CreationInfo,
    #[strum(serialize = "COMMENT")]
    Comment,
    #[strum(serialize = "ION ALPHA")]
    IonAlpha,
    #[strum(serialize = "ION BETA")]
    IonBeta,
    #[strum(serialize = "DELTA-UTC: A0,A1,T,W")]
    DeltaUtc,
    #[strum(serialize = "LEAP SECONDS")]
    LeapSeconds,
    #[strum(serialize = "END OF HEADER")]
    EndOfHeader,
    /// Blank or unknown label
    #[strum(serialize = "")]
    Unrecognized,
}

impl RecordLabel {
    /// Classifies a line from its label field. Matching is case sensitive.
    pub fn classify(line: &str) -> Self {
        let label = substr_trimmed(line, LABEL_OFFSET, LABEL_WIDTH);
        Self::from_str(label).unwrap_or(Self::Unrecognized)
    }

    /// Returns true if this is a known header label
    pub fn is_header(&self) -> bool {
        *self != Self::Unrecognized
    }
}
