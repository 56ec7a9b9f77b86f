//! Broadcast orbit lines.
//!
//! One navigation message spans 8 physical lines: the
//! `PRN / EPOCH / SV CLK` line followed by 7 `BROADCAST ORBIT` lines.
//! Each line is decoded on its own, into its own node.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    epoch::DateTime,
    field::{Columns, DecodingError, FieldError},
};

/// Width of a D19.12 field
pub(crate) const WORD_SIZE: usize = 19;

/// Offsets of the 4 D19.12 fields of a `BROADCAST ORBIT` line (3X,4D19.12)
pub(crate) const ORBIT_OFFSETS: [usize; 4] = [3, 22, 41, 60];

/// `PRN / EPOCH / SV CLK`: I2,5(1X,I2),F5.1,3D19.12
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BroadcastOrbit0 {
    /// Satellite PRN number
    pub prn: u8,
    /// Time of clock, GPS time
    pub toc: DateTime,
    /// SV clock bias [s]
    pub af0: f64,
    /// SV clock drift [s/s]
    pub af1: f64,
    /// SV clock drift rate [s/s²]
    pub af2: Option<f64>,
}

impl BroadcastOrbit0 {
    pub(crate) fn decode(cols: &Columns) -> Result<Self, DecodingError> {
        let prn = cols.i32("prn", 0, 2)?;
        let prn = u8::try_from(prn).map_err(|_| DecodingError {
            field: "prn",
            source: FieldError::Range(prn.to_string()),
        })?;
        Ok(Self {
            prn,
            toc: DateTime {
                year: cols.i32("year", 3, 2)?,
                month: cols.i32("month", 6, 2)?,
                day: cols.i32("day", 9, 2)?,
                hour: cols.i32("hour", 12, 2)?,
                minute: cols.i32("minute", 15, 2)?,
                second: cols.f64("second", 17, 5)?,
            },
            af0: cols.f64("af0", 22, WORD_SIZE)?,
            af1: cols.f64("af1", 41, WORD_SIZE)?,
            af2: cols.opt_f64("af2", 60, WORD_SIZE)?,
        })
    }
}

/// Declares one 4 x D19.12 line where every field is required
macro_rules! broadcast_orbit {
    (
        $(#[$doc:meta])* $name:ident {
            $(#[$d0:meta])* $f0:ident,
            $(#[$d1:meta])* $f1:ident,
            $(#[$d2:meta])* $f2:ident,
            $(#[$d3:meta])* $f3:ident $(,)?
        }
    ) => {
        $(#[$doc])*
        #[derive(Debug, Copy, Clone, Default, PartialEq)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name {
            $(#[$d0])*
            pub $f0: f64,
            $(#[$d1])*
            pub $f1: f64,
            $(#[$d2])*
            pub $f2: f64,
            $(#[$d3])*
            pub $f3: f64,
        }

        impl $name {
            pub(crate) fn decode(cols: &Columns) -> Result<Self, DecodingError> {
                Ok(Self {
                    $f0: cols.f64(stringify!($f0), ORBIT_OFFSETS[0], WORD_SIZE)?,
                    $f1: cols.f64(stringify!($f1), ORBIT_OFFSETS[1], WORD_SIZE)?,
                    $f2: cols.f64(stringify!($f2), ORBIT_OFFSETS[2], WORD_SIZE)?,
                    $f3: cols.f64(stringify!($f3), ORBIT_OFFSETS[3], WORD_SIZE)?,
                })
            }
        }
    };
}

broadcast_orbit!(
    /// `BROADCAST ORBIT - 1`
    BroadcastOrbit1 {
        /// Issue of data, ephemeris
        iode,
        /// Orbit radius sine harmonic correction [m]
        crs,
        /// Mean motion difference [rad/s]
        delta_n,
        /// Mean anomaly at reference time [rad]
        m0,
    }
);

broadcast_orbit!(
    /// `BROADCAST ORBIT - 2`
    BroadcastOrbit2 {
        /// Argument of latitude cosine harmonic correction [rad]
        cuc,
        /// Eccentricity
        e,
        /// Argument of latitude sine harmonic correction [rad]
        cus,
        /// Square root of the semi-major axis [m^1/2]
        sqrt_a,
    }
);

broadcast_orbit!(
    /// `BROADCAST ORBIT - 3`
    BroadcastOrbit3 {
        /// Time of ephemeris, GPS seconds of week [s]
        toe,
        /// Inclination cosine harmonic correction [rad]
        cic,
        /// Longitude of ascending node at weekly epoch [rad]
        omega0,
        /// Inclination sine harmonic correction [rad]
        cis,
    }
);

broadcast_orbit!(
    /// `BROADCAST ORBIT - 4`
    BroadcastOrbit4 {
        /// Inclination at reference time [rad]
        i0,
        /// Orbit radius cosine harmonic correction [m]
        crc,
        /// Argument of perigee [rad]
        omega,
        /// Rate of right ascension [rad/s]
        omega_dot,
    }
);

broadcast_orbit!(
    /// `BROADCAST ORBIT - 5`
    BroadcastOrbit5 {
        /// Rate of inclination [rad/s]
        idot,
        /// Codes on L2 channel
        l2_codes,
        /// GPS week of time of ephemeris, continuous
        toe_week,
        /// L2 P data flag
        l2p_flag,
    }
);

broadcast_orbit!(
    /// `BROADCAST ORBIT - 6`
    BroadcastOrbit6 {
        /// SV accuracy [m]
        accuracy,
        /// SV health
        health,
        /// Group delay [s]
        tgd,
        /// Issue of data, clock
        iodc,
    }
);

/// `BROADCAST ORBIT - 7`: only the transmission time is mandatory
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BroadcastOrbit7 {
    /// Transmission time of message, GPS seconds of week [s]
    pub tow: f64,
    /// Fit interval [h]
    pub fit_interval: Option<f64>,
    pub spare1: Option<f64>,
    pub spare2: Option<f64>,
}

impl BroadcastOrbit7 {
    pub(crate) fn decode(cols: &Columns) -> Result<Self, DecodingError> {
        Ok(Self {
            tow: cols.f64("tow", ORBIT_OFFSETS[0], WORD_SIZE)?,
            fit_interval: cols.opt_f64("fit_interval", ORBIT_OFFSETS[1], WORD_SIZE)?,
            spare1: cols.opt_f64("spare1", ORBIT_OFFSETS[2], WORD_SIZE)?,
            spare2: cols.opt_f64("spare2", ORBIT_OFFSETS[3], WORD_SIZE)?,
        })
    }
}
