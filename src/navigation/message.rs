//! GPS navigation message, assembled from its 8 orbit lines
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "log")]
use log::error;

use gnss::prelude::{Constellation, SV};
use hifitime::{Duration, Epoch, TimeScale};

use crate::{
    epoch::DateTime,
    navigation::orbit::{
        BroadcastOrbit0, BroadcastOrbit1, BroadcastOrbit2, BroadcastOrbit3, BroadcastOrbit4,
        BroadcastOrbit5, BroadcastOrbit6, BroadcastOrbit7,
    },
};

/// GPS ephemeris validity period
const VALIDITY_PERIOD_SECONDS: f64 = 7200.0;

/// [NavMessage] is one complete broadcast ephemeris of one satellite
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavMessage {
    /// Satellite PRN number
    pub prn: u8,
    /// Time of clock, as written
    pub toc: DateTime,
    /// SV clock bias [s]
    pub af0: f64,
    /// SV clock drift [s/s]
    pub af1: f64,
    /// SV clock drift rate [s/s²]
    pub af2: Option<f64>,
    /// Issue of data, ephemeris
    pub iode: f64,
    /// Orbit radius sine harmonic correction [m]
    pub crs: f64,
    /// Mean motion difference [rad/s]
    pub delta_n: f64,
    /// Mean anomaly at reference time [rad]
    pub m0: f64,
    /// Argument of latitude cosine harmonic correction [rad]
    pub cuc: f64,
    /// Eccentricity
    pub e: f64,
    /// Argument of latitude sine harmonic correction [rad]
    pub cus: f64,
    /// Square root of the semi-major axis [m^1/2]
    pub sqrt_a: f64,
    /// Time of ephemeris, seconds of GPS week [s]
    pub toe_sow: f64,
    /// Inclination cosine harmonic correction [rad]
    pub cic: f64,
    /// Longitude of ascending node at weekly epoch [rad]
    pub omega0: f64,
    /// Inclination sine harmonic correction [rad]
    pub cis: f64,
    /// Inclination at reference time [rad]
    pub i0: f64,
    /// Orbit radius cosine harmonic correction [m]
    pub crc: f64,
    /// Argument of perigee [rad]
    pub omega: f64,
    /// Rate of right ascension [rad/s]
    pub omega_dot: f64,
    /// Rate of inclination [rad/s]
    pub idot: f64,
    /// Codes on L2 channel
    pub l2_codes: f64,
    /// Continuous GPS week of time of ephemeris
    pub toe_week: f64,
    /// L2 P data flag
    pub l2p_flag: f64,
    /// SV accuracy [m]
    pub accuracy: f64,
    /// SV health
    pub health: f64,
    /// Group delay [s]
    pub tgd: f64,
    /// Issue of data, clock
    pub iodc: f64,
    /// Transmission time of message, seconds of GPS week [s]
    pub tow: f64,
    /// Fit interval [h]
    pub fit_interval: Option<f64>,
    pub spare1: Option<f64>,
    pub spare2: Option<f64>,
}

impl NavMessage {
    /// Merges the 8 orbit lines of one message
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_orbits(
        o0: &BroadcastOrbit0,
        o1: &BroadcastOrbit1,
        o2: &BroadcastOrbit2,
        o3: &BroadcastOrbit3,
        o4: &BroadcastOrbit4,
        o5: &BroadcastOrbit5,
        o6: &BroadcastOrbit6,
        o7: &BroadcastOrbit7,
    ) -> Self {
        Self {
            prn: o0.prn,
            toc: o0.toc,
            af0: o0.af0,
            af1: o0.af1,
            af2: o0.af2,
            iode: o1.iode,
            crs: o1.crs,
            delta_n: o1.delta_n,
            m0: o1.m0,
            cuc: o2.cuc,
            e: o2.e,
            cus: o2.cus,
            sqrt_a: o2.sqrt_a,
            toe_sow: o3.toe,
            cic: o3.cic,
            omega0: o3.omega0,
            cis: o3.cis,
            i0: o4.i0,
            crc: o4.crc,
            omega: o4.omega,
            omega_dot: o4.omega_dot,
            idot: o5.idot,
            l2_codes: o5.l2_codes,
            toe_week: o5.toe_week,
            l2p_flag: o5.l2p_flag,
            accuracy: o6.accuracy,
            health: o6.health,
            tgd: o6.tgd,
            iodc: o6.iodc,
            tow: o7.tow,
            fit_interval: o7.fit_interval,
            spare1: o7.spare1,
            spare2: o7.spare2,
        }
    }

    /// Returns the [SV] this message describes
    pub fn sv(&self) -> SV {
        SV::new(Constellation::GPS, self.prn)
    }

    /// Returns time of clock as [Epoch] in [TimeScale::GPST].
    /// None if the date is not a valid calendar date.
    pub fn toc(&self) -> Option<Epoch> {
        self.toc.to_epoch(TimeScale::GPST)
    }

    /// Returns time of ephemeris as [Epoch] in [TimeScale::GPST],
    /// from the continuous week counter and seconds of week.
    pub fn toe(&self) -> Option<Epoch> {
        if !(0.0..=u32::MAX as f64).contains(&self.toe_week) {
            #[cfg(feature = "log")]
            error!("{}: invalid week counter {}", self.sv(), self.toe_week);
            return None;
        }
        let week_dur = Duration::from_days(self.toe_week.trunc() * 7.0);
        let sec_dur = Duration::from_seconds(self.toe_sow);
        Some(Epoch::from_duration(week_dur + sec_dur, TimeScale::GPST))
    }

    /// Returns onboard clock (bias [s], drift [s/s], drift rate [s/s²]).
    /// A blank drift rate counts as null.
    pub fn sv_clock(&self) -> (f64, f64, f64) {
        (self.af0, self.af1, self.af2.unwrap_or(0.0))
    }

    /// Returns group delay as [Duration]
    pub fn tgd(&self) -> Duration {
        Duration::from_seconds(self.tgd)
    }

    /// Returns true if the satellite declared itself healthy
    pub fn is_healthy(&self) -> bool {
        self.health == 0.0
    }

    /// Returns onboard clock correction at `t`, iterating `max_iter` times
    /// on the clock polynomial. None if `t` precedes the time of clock.
    pub fn clock_correction(&self, t: Epoch, max_iter: usize) -> Option<Duration> {
        let toc = self.toc()?;
        let t = t.to_time_scale(TimeScale::GPST);
        if t < toc {
            #[cfg(feature = "log")]
            error!("{}: t < toc", self.sv());
            return None;
        }
        let (a0, a1, a2) = self.sv_clock();
        let mut dt = (t - toc).to_seconds();
        for _ in 0..max_iter {
            dt -= a0 + a1 * dt + a2 * dt.powi(2);
        }
        Some(Duration::from_seconds(a0 + a1 * dt + a2 * dt.powi(2)))
    }

    /// Returns true if this ephemeris may be used at `t`
    pub fn is_valid(&self, t: Epoch) -> bool {
        match self.toe() {
            Some(toe) => t > toe && (t - toe) < Duration::from_seconds(VALIDITY_PERIOD_SECONDS),
            None => false,
        }
    }
}
