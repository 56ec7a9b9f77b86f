#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Klobuchar ionospheric model, as broadcast in the header
/// (`ION ALPHA` and `ION BETA`)
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KbModel {
    /// Alpha coefficients
    /// ((sec), (sec.semi-circle⁻¹), (sec.semi-circle⁻²), (sec.semi-circle⁻³))
    pub alpha: [f64; 4],
    /// Beta coefficients
    /// ((sec), (sec.semi-circle⁻¹), (sec.semi-circle⁻²), (sec.semi-circle⁻³))
    pub beta: [f64; 4],
}

impl KbModel {
    /// Period of the ionospheric delay cosine [s].
    /// Values below 72000 s are clamped, as broadcast models require.
    pub fn period(&self, latitude_semicircles: f64) -> f64 {
        let period = Self::polynomial(&self.beta, latitude_semicircles);
        period.max(72000.0)
    }

    /// Amplitude of the ionospheric delay cosine [s].
    /// Negative values are clamped to zero.
    pub fn amplitude(&self, latitude_semicircles: f64) -> f64 {
        let amplitude = Self::polynomial(&self.alpha, latitude_semicircles);
        amplitude.max(0.0)
    }

    fn polynomial(coefs: &[f64; 4], x: f64) -> f64 {
        coefs.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clamped_terms() {
        let model = KbModel {
            alpha: [0.1118E-07, 0.7451E-08, -0.5960E-07, -0.5960E-07],
            beta: [0.9011E+05, 0.1638E+05, -0.1966E+06, -0.6554E+05],
        };
        assert_eq!(model.amplitude(0.0), 0.1118E-07);
        assert_eq!(model.period(0.0), 0.9011E+05);
        // strongly negative cubic terms
        assert_eq!(model.amplitude(1.0), 0.0);
        assert_eq!(model.period(1.0), 72000.0);
    }
}
