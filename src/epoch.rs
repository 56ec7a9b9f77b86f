//! Calendar date as written in navigation records
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use hifitime::{Epoch, TimeScale};

/// Calendar date and time of day, as it appears on the
/// `PRN / EPOCH / SV CLK` line. The year is stored as written
/// (two digits in RINEX 2 files).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTime {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: f64,
}

impl DateTime {
    /// Returns the 4 digit year.
    /// Two digit years 80-99 stand for 1980-1999, 00-79 for 2000-2079.
    pub fn full_year(&self) -> i32 {
        match self.year {
            y if (0..80).contains(&y) => y + 2000,
            y if (80..100).contains(&y) => y + 1900,
            y => y,
        }
    }

    /// Converts this date to an [Epoch] expressed in given [TimeScale].
    /// Returns None if this is not a valid calendar date.
    pub fn to_epoch(&self, ts: TimeScale) -> Option<Epoch> {
        let month = u8::try_from(self.month).ok()?;
        let day = u8::try_from(self.day).ok()?;
        let hour = u8::try_from(self.hour).ok()?;
        let minute = u8::try_from(self.minute).ok()?;
        if !(0.0..60.0).contains(&self.second) {
            return None;
        }
        let second = self.second.trunc() as u8;
        let nanos = ((self.second - self.second.trunc()) * 1.0E9).round() as u32;
        Epoch::maybe_from_gregorian(
            self.full_year(),
            month,
            day,
            hour,
            minute,
            second,
            nanos,
            ts,
        )
        .ok()
    }
}
